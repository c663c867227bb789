// ABOUTME: Spacing and column limit used by both layout passes.
// ABOUTME: Validated on construction; the passes only clamp max_columns.

use colgrid_core::config::{validate_max_columns, validate_spacing};
use colgrid_core::{ConfigError, GridConfig, ValidatedConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParameters {
    column_spacing: f32,
    row_spacing: f32,
    max_columns: i32,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            column_spacing: 0.0,
            row_spacing: 0.0,
            max_columns: 1,
        }
    }
}

impl LayoutParameters {
    pub fn new(column_spacing: f32, row_spacing: f32, max_columns: i32) -> Result<Self, ConfigError> {
        validate_max_columns(max_columns.into())?;
        Ok(Self {
            column_spacing: validate_spacing("column_spacing", column_spacing)?,
            row_spacing: validate_spacing("row_spacing", row_spacing)?,
            max_columns,
        })
    }

    pub fn column_spacing(&self) -> f32 {
        self.column_spacing
    }

    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    pub fn max_columns(&self) -> i32 {
        self.max_columns
    }

    /// Column limit the passes work with, never below one
    pub fn effective_columns(&self) -> usize {
        self.max_columns.max(1) as usize
    }

    pub fn with_column_spacing(self, column_spacing: f32) -> Result<Self, ConfigError> {
        Self::new(column_spacing, self.row_spacing, self.max_columns)
    }

    pub fn with_row_spacing(self, row_spacing: f32) -> Result<Self, ConfigError> {
        Self::new(self.column_spacing, row_spacing, self.max_columns)
    }

    pub fn with_max_columns(self, max_columns: i32) -> Result<Self, ConfigError> {
        Self::new(self.column_spacing, self.row_spacing, max_columns)
    }
}

impl From<ValidatedConfig> for LayoutParameters {
    fn from(config: ValidatedConfig) -> Self {
        Self {
            column_spacing: config.column_spacing,
            row_spacing: config.row_spacing,
            max_columns: i32::try_from(config.max_columns).unwrap_or(i32::MAX),
        }
    }
}

impl TryFrom<&GridConfig> for LayoutParameters {
    type Error = ConfigError;

    fn try_from(config: &GridConfig) -> Result<Self, Self::Error> {
        Ok(config.validate()?.into())
    }
}

impl From<LayoutParameters> for GridConfig {
    fn from(params: LayoutParameters) -> Self {
        Self {
            column_spacing: params.column_spacing,
            row_spacing: params.row_spacing,
            max_columns: params.max_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_config_default() {
        let params = LayoutParameters::try_from(&GridConfig::default()).unwrap();
        assert_eq!(params, LayoutParameters::default());
        assert_eq!(params.effective_columns(), 1);
    }

    #[test]
    fn rejects_zero_columns() {
        assert!(matches!(
            LayoutParameters::new(0.0, 0.0, 0),
            Err(ConfigError::InvalidMaxColumns(0))
        ));
        assert!(LayoutParameters::default().with_max_columns(-3).is_err());
    }

    #[test]
    fn builders_keep_other_fields() {
        let params = LayoutParameters::new(2.0, 3.0, 4)
            .and_then(|p| p.with_row_spacing(7.0))
            .unwrap();
        assert_eq!(params.column_spacing(), 2.0);
        assert_eq!(params.row_spacing(), 7.0);
        assert_eq!(params.max_columns(), 4);
    }

    #[test]
    fn converts_back_to_config() {
        let params = LayoutParameters::new(1.5, 2.5, 6).unwrap();
        let config = GridConfig::from(params);
        assert_eq!(LayoutParameters::try_from(&config).unwrap(), params);
    }
}
