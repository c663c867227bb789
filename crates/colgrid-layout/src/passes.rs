// ABOUTME: The measure and arrange passes of the column-major grid.
// ABOUTME: Cells are uniform and sized to the largest item on each axis.

use colgrid_core::{Rect, Size};

use crate::distribution::ColumnDistribution;
use crate::item::LayoutItem;
use crate::params::LayoutParameters;

/// Result of a measurement pass, handed to [`arrange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Largest measured width and largest measured height, taken independently
    pub cell_size: Size,
    /// Footprint of the whole grid
    pub desired_size: Size,
    /// Number of items that were measured
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Arrange called before the grid was measured")]
    NotMeasured,

    #[error("Measurement covers {measured} items but {current} were passed to arrange")]
    StaleMeasurement { measured: usize, current: usize },

    #[error("Item {index} wants {desired} but the measured cell is only {cell}")]
    ItemOutgrewCell { index: usize, desired: Size, cell: Size },
}

/// `count` tracks separated by `spacing`. An empty run takes no space.
fn span(track: f32, count: usize, spacing: f32) -> f32 {
    track * count as f32 + spacing * count.saturating_sub(1) as f32
}

/// Measure every item against `available` and size the grid.
///
/// Every item gets the same, unmodified constraint. An empty slice measures
/// as `Size::ZERO`.
pub fn measure<I: LayoutItem>(
    items: &mut [I],
    available: Size,
    params: &LayoutParameters,
) -> Measurement {
    let dist = ColumnDistribution::new(items.len(), params.effective_columns());

    let cell_size = items
        .iter_mut()
        .map(|item| item.measure(available))
        .fold(Size::ZERO, Size::max);

    let desired_size = Size::new(
        span(cell_size.width, dist.column_count(), params.column_spacing()),
        span(cell_size.height, dist.rows(), params.row_spacing()),
    );

    tracing::debug!(
        items = items.len(),
        columns = dist.column_count(),
        rows = dist.rows(),
        %cell_size,
        %desired_size,
        "Measured column-major grid"
    );

    Measurement {
        cell_size,
        desired_size,
        item_count: items.len(),
    }
}

/// Place every item in column-major order and return `final_size` unchanged.
///
/// Items keep their own desired size; only their origin snaps to the uniform
/// cell grid. Fails, before placing anything, if `measurement` was taken over
/// a different number of items or an item no longer fits the measured cell.
/// Either means the list changed since the last `measure`.
pub fn arrange<I: LayoutItem>(
    items: &mut [I],
    final_size: Size,
    params: &LayoutParameters,
    measurement: &Measurement,
) -> Result<Size, LayoutError> {
    if measurement.item_count != items.len() {
        tracing::warn!(
            measured = measurement.item_count,
            current = items.len(),
            "Refusing to arrange with a stale measurement"
        );
        return Err(LayoutError::StaleMeasurement {
            measured: measurement.item_count,
            current: items.len(),
        });
    }

    let cell = measurement.cell_size;
    if let Some((index, desired)) = items
        .iter()
        .map(LayoutItem::desired_size)
        .enumerate()
        .find(|(_, desired)| desired.width > cell.width || desired.height > cell.height)
    {
        tracing::warn!(index, %desired, %cell, "Refusing to arrange an item larger than its cell");
        return Err(LayoutError::ItemOutgrewCell {
            index,
            desired,
            cell,
        });
    }

    let dist = ColumnDistribution::new(items.len(), params.effective_columns());
    let column_step = cell.width + params.column_spacing();
    let row_step = cell.height + params.row_spacing();

    let mut horizontal_offset = 0.0;
    let mut vertical_offset = 0.0;
    let mut column = 0;

    for (index, item) in items.iter_mut().enumerate() {
        let desired = item.desired_size();
        let rect = Rect::new(horizontal_offset, vertical_offset, desired.width, desired.height);
        tracing::trace!(index, column, ?rect, "Placing item");
        item.arrange(rect);

        if dist.ends_column(index, column) {
            horizontal_offset += column_step;
            vertical_offset = 0.0;
            column += 1;
        } else {
            vertical_offset += row_step;
        }
    }

    tracing::debug!(items = items.len(), columns = column, "Arranged column-major grid");
    Ok(final_size)
}
