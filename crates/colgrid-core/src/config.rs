// ABOUTME: Grid layout configuration handling.
// ABOUTME: Loads, validates, and saves spacing/column settings from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw layout settings as written by the user. Nothing here is trusted until
/// [`GridConfig::validate`] has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Horizontal gap between adjacent columns
    pub column_spacing: f32,

    /// Vertical gap between adjacent rows within a column
    pub row_spacing: f32,

    /// Upper bound on the number of columns (must be > 0)
    pub max_columns: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_spacing: 0.0,
            row_spacing: 0.0,
            max_columns: 1,
        }
    }
}

/// Settings that passed boundary validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    pub column_spacing: f32,
    pub row_spacing: f32,
    pub max_columns: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("max_columns must be greater than 0, got {0}")]
    InvalidMaxColumns(i64),

    #[error("{name} must be a finite value >= 0, got {value}")]
    InvalidSpacing { name: &'static str, value: f32 },
}

/// Reject column limits the layout cannot honour
pub fn validate_max_columns(value: i64) -> Result<u32, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidMaxColumns(value));
    }
    u32::try_from(value).map_err(|_| ConfigError::InvalidMaxColumns(value))
}

/// Reject negative, NaN and infinite gaps
pub fn validate_spacing(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidSpacing { name, value })
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        Ok(ValidatedConfig {
            column_spacing: validate_spacing("column_spacing", self.column_spacing)?,
            row_spacing: validate_spacing("row_spacing", self.row_spacing)?,
            max_columns: validate_max_columns(self.max_columns.into())?,
        })
    }

    /// Get the default config file path (~/.config/colgrid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colgrid").join("config.toml"))
    }

    /// Load config from a path. The result is validated before it is returned.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GridConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if there is
    /// no config file. A file that exists but is unreadable or invalid is an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_or_default_at(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a path, falling back to defaults only if it is missing
    pub fn load_or_default_at(path: &std::path::Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::ReadError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        self.validate()?;
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_single_column_without_gaps() {
        let config = GridConfig::default();
        let validated = config.validate().unwrap();
        assert_eq!(validated.max_columns, 1);
        assert_eq!(validated.column_spacing, 0.0);
        assert_eq!(validated.row_spacing, 0.0);
    }

    #[test]
    fn rejects_non_positive_max_columns() {
        for bad in [0, -1, i32::MIN] {
            let config = GridConfig {
                max_columns: bad,
                ..GridConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidMaxColumns(v)) if v == i64::from(bad)
            ));
        }
    }

    #[test]
    fn rejects_negative_or_nan_spacing() {
        let config = GridConfig {
            row_spacing: -1.0,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpacing { name: "row_spacing", .. })
        ));

        let config = GridConfig {
            column_spacing: f32::NAN,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpacing { name: "column_spacing", .. })
        ));
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: GridConfig = toml::from_str("max_columns = 3").unwrap();
        assert_eq!(config.max_columns, 3);
        assert_eq!(config.column_spacing, 0.0);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = GridConfig {
            column_spacing: 8.0,
            row_spacing: 4.5,
            max_columns: 3,
        };

        config.save(&path).unwrap();
        let loaded = GridConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_columns = 0\n").unwrap();

        assert!(matches!(
            GridConfig::load(&path),
            Err(ConfigError::InvalidMaxColumns(0))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert_eq!(GridConfig::load_or_default_at(&path).unwrap(), GridConfig::default());
    }

    #[test]
    fn invalid_existing_file_is_not_replaced_by_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_columns = 0\ncolumn_spacing = 9.0\n").unwrap();

        assert!(matches!(
            GridConfig::load_or_default_at(&path),
            Err(ConfigError::InvalidMaxColumns(0))
        ));

        std::fs::write(&path, "max_columns = \"three\"\n").unwrap();
        assert!(matches!(
            GridConfig::load_or_default_at(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn default_path_has_expected_structure() {
        if let Some(p) = GridConfig::default_path() {
            assert!(p.ends_with("colgrid/config.toml"));
        }
    }
}
