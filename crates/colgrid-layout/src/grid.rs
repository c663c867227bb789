// ABOUTME: Stateful column-major grid a host drives through measure/arrange.
// ABOUTME: Parameter setters validate input and notify the host to re-layout.

use std::fmt;

use colgrid_core::{ConfigError, GridConfig, Size};

use crate::item::LayoutItem;
use crate::params::LayoutParameters;
use crate::passes::{self, LayoutError, Measurement};

/// Which parameter changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    ColumnSpacing,
    RowSpacing,
    MaxColumns,
}

type Listener = Box<dyn FnMut(Invalidation)>;

/// Column-major uniform-to-largest grid.
///
/// Keeps the last [`Measurement`] so a host can call `measure` and later
/// `arrange` with only the item list. Changing a parameter drops the cached
/// desired size and tells the listener; the cell size survives until the next
/// `measure` overwrites it.
pub struct ColumnMajorGrid {
    params: LayoutParameters,
    measurement: Option<Measurement>,
    desired_size: Option<Size>,
    listener: Option<Listener>,
}

impl fmt::Debug for ColumnMajorGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnMajorGrid")
            .field("params", &self.params)
            .field("measurement", &self.measurement)
            .field("desired_size", &self.desired_size)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for ColumnMajorGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnMajorGrid {
    pub fn new() -> Self {
        Self::with_parameters(LayoutParameters::default())
    }

    pub fn with_parameters(params: LayoutParameters) -> Self {
        Self {
            params,
            measurement: None,
            desired_size: None,
            listener: None,
        }
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_parameters(LayoutParameters::try_from(config)?))
    }

    pub fn parameters(&self) -> &LayoutParameters {
        &self.params
    }

    pub fn column_spacing(&self) -> f32 {
        self.params.column_spacing()
    }

    pub fn row_spacing(&self) -> f32 {
        self.params.row_spacing()
    }

    pub fn max_columns(&self) -> i32 {
        self.params.max_columns()
    }

    /// Register the callback told about every parameter change
    pub fn set_invalidation_listener(&mut self, listener: impl FnMut(Invalidation) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn set_column_spacing(&mut self, value: f32) -> Result<(), ConfigError> {
        let params = self.params.with_column_spacing(value)?;
        self.replace_parameters(params, Invalidation::ColumnSpacing);
        Ok(())
    }

    pub fn set_row_spacing(&mut self, value: f32) -> Result<(), ConfigError> {
        let params = self.params.with_row_spacing(value)?;
        self.replace_parameters(params, Invalidation::RowSpacing);
        Ok(())
    }

    /// Values <= 0 are rejected and leave the grid unchanged.
    pub fn set_max_columns(&mut self, value: i32) -> Result<(), ConfigError> {
        let params = self.params.with_max_columns(value)?;
        self.replace_parameters(params, Invalidation::MaxColumns);
        Ok(())
    }

    fn replace_parameters(&mut self, params: LayoutParameters, reason: Invalidation) {
        if params == self.params {
            return;
        }
        self.params = params;
        self.invalidate_measure(reason);
    }

    fn invalidate_measure(&mut self, reason: Invalidation) {
        tracing::debug!(?reason, "Grid layout invalidated");
        self.desired_size = None;
        if let Some(listener) = self.listener.as_mut() {
            listener(reason);
        }
    }

    /// Forget the last measurement. Hosts call this when the item list changes
    /// structurally; `arrange` then fails until the next `measure`.
    pub fn invalidate_children(&mut self) {
        self.measurement = None;
        self.desired_size = None;
    }

    /// Desired size from the last measurement, if it is still valid
    pub fn desired_size(&self) -> Option<Size> {
        self.desired_size
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        self.measurement.as_ref()
    }

    /// Cell size the next `arrange` will use
    pub fn cell_size(&self) -> Option<Size> {
        self.measurement.map(|m| m.cell_size)
    }

    /// Measure the children. An absent list is treated as having no children:
    /// it measures as zero and leaves the stored measurement alone.
    pub fn measure<I: LayoutItem>(&mut self, children: Option<&mut [I]>, available: Size) -> Size {
        let Some(children) = children else {
            self.desired_size = Some(Size::ZERO);
            return Size::ZERO;
        };
        let measurement = passes::measure(children, available, &self.params);
        self.measurement = Some(measurement);
        self.desired_size = Some(measurement.desired_size);
        measurement.desired_size
    }

    /// Arrange the children measured last. An absent list places nothing.
    pub fn arrange<I: LayoutItem>(
        &mut self,
        children: Option<&mut [I]>,
        final_size: Size,
    ) -> Result<Size, LayoutError> {
        let Some(children) = children else {
            return Ok(final_size);
        };
        let Some(measurement) = self.measurement.as_ref() else {
            tracing::warn!("Arrange requested before measure");
            return Err(LayoutError::NotMeasured);
        };
        passes::arrange(children, final_size, &self.params, measurement)
    }
}
