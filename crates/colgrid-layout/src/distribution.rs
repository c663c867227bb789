// ABOUTME: Splits an item count into column-major columns.
// ABOUTME: Leading columns absorb the remainder, one extra item each.

use serde::Serialize;

/// Where an item ends up in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSlot {
    pub column: usize,
    pub row: usize,
}

/// How `item_count` items are spread over at most `effective_columns` columns.
///
/// The first `extra_columns` columns hold `min_items_per_column + 1` items, the
/// rest hold `min_items_per_column`. When there are more columns than items,
/// `min_items_per_column` is 0 and every item sits alone in its own column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDistribution {
    item_count: usize,
    effective_columns: usize,
    min_items_per_column: usize,
    extra_columns: usize,
}

impl ColumnDistribution {
    /// `max_columns` is clamped to at least one column.
    pub fn new(item_count: usize, max_columns: usize) -> Self {
        let effective_columns = max_columns.max(1);
        Self {
            item_count,
            effective_columns,
            min_items_per_column: item_count / effective_columns,
            extra_columns: item_count % effective_columns,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Column limit after clamping, never below one
    pub fn effective_columns(&self) -> usize {
        self.effective_columns
    }

    pub fn min_items_per_column(&self) -> usize {
        self.min_items_per_column
    }

    /// Number of leading columns holding one extra item
    pub fn extra_columns(&self) -> usize {
        self.extra_columns
    }

    /// Number of non-empty columns
    pub fn column_count(&self) -> usize {
        self.effective_columns.min(self.item_count)
    }

    /// Height of the tallest column, in items
    pub fn rows(&self) -> usize {
        self.item_count.div_ceil(self.effective_columns)
    }

    pub fn items_in_column(&self, column: usize) -> usize {
        if column >= self.column_count() {
            0
        } else if column < self.extra_columns {
            self.min_items_per_column + 1
        } else {
            self.min_items_per_column
        }
    }

    /// Whether the item at `index`, currently being placed in `column`, is the
    /// last one of that column. This is the test the arrangement walk uses to
    /// decide between moving down a row and starting the next column.
    /// A `column` that cannot hold `index` never ends there.
    pub fn ends_column(&self, index: usize, column: usize) -> bool {
        let min = self.min_items_per_column;
        if column < self.extra_columns {
            index % (min + 1) == min
        } else if min == 0 {
            // More columns than items: each item is its own column.
            true
        } else {
            match index.checked_sub(self.extra_columns * (min + 1)) {
                Some(adjusted) => adjusted % min == min - 1,
                None => false,
            }
        }
    }

    /// Closed-form slot of the item at `index`
    pub fn slot(&self, index: usize) -> Option<GridSlot> {
        if index >= self.item_count {
            return None;
        }
        let tall = self.min_items_per_column + 1;
        let tall_items = self.extra_columns * tall;
        let slot = if index < tall_items {
            GridSlot {
                column: index / tall,
                row: index % tall,
            }
        } else {
            let rest = index - tall_items;
            GridSlot {
                column: self.extra_columns + rest / self.min_items_per_column,
                row: rest % self.min_items_per_column,
            }
        };
        Some(slot)
    }
}
