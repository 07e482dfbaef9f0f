//! Selection store: the cells the active user is claiming this session.
//!
//! ARCHITECTURE
//! ============
//! Every mutation goes through one of three entry points (single cell,
//! rectangle, auto-block) and each cell is checked in the same order: grid
//! bounds, occupancy, already selected, capacity. A rejected cell leaves the
//! set untouched; rejections are reported, never raised.
//!
//! Batch fills walk their region in row-major order (top row first, left to
//! right) so that a fill cut short by the capacity cap always keeps the same
//! cells. Regions are clipped to the grid before iterating; cells outside the
//! grid are counted arithmetically instead of being visited one by one.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::GridConfig;
use crate::grid::{Cell, CellRect, block_side, saturating_count};
use crate::occupancy::OccupancyIndex;

/// Result of offering one cell to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The cell is now selected (or already was).
    Accepted,
    /// The cell lies outside the grid.
    RejectedOutOfBounds,
    /// The cell belongs to an existing claim.
    RejectedOccupied,
    /// The store is full.
    RejectedCapacity,
}

impl AddOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Per-bucket tally for a rectangle or auto-block fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Newly selected cells, in the order they were added.
    pub added: Vec<Cell>,
    /// Cells that were already part of the selection.
    pub already_selected: usize,
    /// Cells skipped because they are claimed by someone else.
    pub occupied: usize,
    /// Cells of the requested region that fall outside the grid.
    pub out_of_bounds: usize,
    /// In-bounds cells never visited because the capacity cap was reached.
    pub capacity_skipped: usize,
}

impl FillReport {
    /// Number of cells newly added.
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    /// Whether the fill stopped early at the capacity cap.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.capacity_skipped > 0
    }
}

/// Mutable set of selected cells guarded by bounds, occupancy, and capacity.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    cells: HashSet<Cell>,
    /// First cell accepted since the store was created or last cleared.
    anchor: Option<Cell>,
    grid: GridConfig,
    capacity: usize,
    occupancy: Arc<OccupancyIndex>,
}

impl SelectionStore {
    /// Create an empty store for `grid` holding at most `capacity` cells.
    #[must_use]
    pub fn new(grid: GridConfig, capacity: usize, occupancy: Arc<OccupancyIndex>) -> Self {
        Self { cells: HashSet::new(), anchor: None, grid, capacity, occupancy }
    }

    /// Offer a single cell.
    pub fn try_add_cell(&mut self, cell: Cell) -> AddOutcome {
        if !self.grid.contains(cell) {
            return AddOutcome::RejectedOutOfBounds;
        }
        if self.occupancy.contains(cell) {
            return AddOutcome::RejectedOccupied;
        }
        if self.cells.contains(&cell) {
            return AddOutcome::Accepted;
        }
        if self.is_full() {
            return AddOutcome::RejectedCapacity;
        }
        self.insert(cell);
        AddOutcome::Accepted
    }

    /// Fill the inclusive rectangle spanned by two corners, in either order.
    ///
    /// Stops as soon as the capacity cap is reached; the rest of the rectangle
    /// is counted in [`FillReport::capacity_skipped`].
    pub fn try_add_rectangle(&mut self, a: Cell, b: Cell) -> FillReport {
        self.fill(CellRect::from_corners(a, b), None)
    }

    /// Best-effort square block of `target` cells with its top-left at `anchor`.
    ///
    /// The block side is `ceil(sqrt(target))`. Occupied, already selected, and
    /// off-grid cells are skipped rather than replaced, so fewer than `target`
    /// cells may be added.
    pub fn add_auto_block(&mut self, anchor: Cell, target: usize) -> FillReport {
        let Some(square) = CellRect::square(anchor, block_side(target)) else {
            return FillReport::default();
        };
        self.fill(square, Some(target))
    }

    /// Remove every cell. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.cells.len();
        self.cells.clear();
        self.anchor = None;
        removed
    }

    /// Selected cells in row-major order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable_by_key(|c| c.row_major_key());
        cells
    }

    /// Unordered view of the selected cells.
    #[must_use]
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// First cell accepted since the store was created or last cleared.
    #[must_use]
    pub fn anchor(&self) -> Option<Cell> {
        self.anchor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cells that can still be added before the cap.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.cells.len())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.capacity
    }

    /// Empty store with the same grid, capacity, and occupancy.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Self::new(self.grid, self.capacity, Arc::clone(&self.occupancy))
    }

    fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
        if self.anchor.is_none() {
            self.anchor = Some(cell);
        }
    }

    /// Walk `region` row-major, adding eligible cells until the region, the
    /// optional `limit` of new cells, or the capacity cap runs out.
    fn fill(&mut self, region: CellRect, limit: Option<usize>) -> FillReport {
        let mut report = FillReport::default();
        let Some(clipped) = self.grid.bounds().and_then(|bounds| region.intersect(&bounds)) else {
            report.out_of_bounds = saturating_count(region.area());
            return report;
        };
        report.out_of_bounds = saturating_count(region.area().saturating_sub(clipped.area()));
        let in_bounds = saturating_count(clipped.area());

        for (visited, cell) in clipped.cells().enumerate() {
            if limit.is_some_and(|limit| report.added.len() >= limit) {
                break;
            }
            if self.is_full() {
                report.capacity_skipped = in_bounds - visited;
                break;
            }
            if self.occupancy.contains(cell) {
                report.occupied += 1;
            } else if self.cells.contains(&cell) {
                report.already_selected += 1;
            } else {
                self.insert(cell);
                report.added.push(cell);
            }
        }
        report
    }
}
