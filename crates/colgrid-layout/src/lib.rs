// ABOUTME: Column-major uniform-to-largest grid layout.
// ABOUTME: Sizes every cell to the largest item and fills columns top to bottom.

mod distribution;
mod grid;
mod item;
mod params;
mod passes;

pub use distribution::{ColumnDistribution, GridSlot};
pub use grid::{ColumnMajorGrid, Invalidation};
pub use item::{FixedItem, LayoutItem};
pub use params::LayoutParameters;
pub use passes::{arrange, measure, LayoutError, Measurement};
