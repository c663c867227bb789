// ABOUTME: Placement summary printed by the colgrid binary.
// ABOUTME: Renders as an aligned text table or serializes to JSON.

use std::fmt;

use serde::Serialize;

use colgrid_core::{Rect, Size};
use colgrid_layout::{ColumnDistribution, ColumnMajorGrid, FixedItem, GridSlot};

#[derive(Debug, Serialize)]
pub struct Placement {
    pub index: usize,
    pub slot: GridSlot,
    pub rect: Rect,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub max_columns: i32,
    pub columns: usize,
    pub rows: usize,
    pub cell_size: Size,
    pub desired_size: Size,
    pub placements: Vec<Placement>,
}

impl Report {
    pub fn new(grid: &ColumnMajorGrid, items: &[FixedItem], desired_size: Size) -> Self {
        let dist = ColumnDistribution::new(items.len(), grid.parameters().effective_columns());
        let placements = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                Some(Placement {
                    index,
                    slot: dist.slot(index)?,
                    rect: item.bounds()?,
                })
            })
            .collect();

        Self {
            max_columns: grid.max_columns(),
            columns: dist.column_count(),
            rows: dist.rows(),
            cell_size: grid.cell_size().unwrap_or_default(),
            desired_size,
            placements,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} columns x {} rows (max {}), cell {}, desired {}",
            self.columns, self.rows, self.max_columns, self.cell_size, self.desired_size
        )?;
        if self.placements.is_empty() {
            return Ok(());
        }
        writeln!(
            f,
            "{:>5} {:>6} {:>4} {:>9} {:>9} {:>9} {:>9}",
            "item", "column", "row", "x", "y", "width", "height"
        )?;
        for p in &self.placements {
            writeln!(
                f,
                "{:>5} {:>6} {:>4} {:>9} {:>9} {:>9} {:>9}",
                p.index, p.slot.column, p.slot.row, p.rect.x, p.rect.y, p.rect.width, p.rect.height
            )?;
        }
        Ok(())
    }
}
