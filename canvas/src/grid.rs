//! Discrete grid geometry: cells, inclusive cell rectangles, and grid bounds.
//!
//! Cells use signed coordinates so that pointer positions left of or above the
//! grid map to a representable (negative) cell; bounds are enforced by the
//! selection store, not by the coordinate mapping.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};

/// One grid cell, identified by column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Sort key that orders cells row by row, left to right.
    #[must_use]
    pub fn row_major_key(self) -> (i64, i64) {
        (self.y, self.x)
    }
}

/// Axis-aligned, inclusive range of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRect {
    /// Top-left corner (smallest x and y).
    pub min: Cell,
    /// Bottom-right corner (largest x and y), inclusive.
    pub max: Cell,
}

impl CellRect {
    /// Normalize two arbitrary corners into an inclusive rectangle.
    #[must_use]
    pub fn from_corners(a: Cell, b: Cell) -> Self {
        Self {
            min: Cell::new(a.x.min(b.x), a.y.min(b.y)),
            max: Cell::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Square of `side` cells whose top-left corner is `origin`.
    ///
    /// Returns `None` for `side == 0`. The far edge saturates at `i64::MAX`.
    #[must_use]
    pub fn square(origin: Cell, side: usize) -> Option<Self> {
        let extent = i64::try_from(side.checked_sub(1)?).unwrap_or(i64::MAX);
        Some(Self {
            min: origin,
            max: Cell::new(origin.x.saturating_add(extent), origin.y.saturating_add(extent)),
        })
    }

    /// Number of columns covered.
    #[must_use]
    pub fn width(&self) -> u128 {
        span(self.min.x, self.max.x)
    }

    /// Number of rows covered.
    #[must_use]
    pub fn height(&self) -> u128 {
        span(self.min.y, self.max.y)
    }

    /// Total number of cells covered, saturating at `u128::MAX`.
    ///
    /// Only a rectangle spanning the whole `i64` plane on both axes saturates.
    #[must_use]
    pub fn area(&self) -> u128 {
        self.width().checked_mul(self.height()).unwrap_or(u128::MAX)
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x) && (self.min.y..=self.max.y).contains(&cell.y)
    }

    /// Overlapping region of two rectangles, if any.
    #[must_use]
    pub fn intersect(&self, other: &CellRect) -> Option<CellRect> {
        let min = Cell::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Cell::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        (min.x <= max.x && min.y <= max.y).then_some(CellRect { min, max })
    }

    /// Every covered cell in row-major order: top row first, left to right.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Cell::new(x, y)))
    }
}

fn span(lo: i64, hi: i64) -> u128 {
    u128::try_from(i128::from(hi) - i128::from(lo) + 1).unwrap_or(0)
}

/// Side length of the smallest square holding at least `target` cells,
/// i.e. `ceil(sqrt(target))`.
#[must_use]
pub fn block_side(target: usize) -> usize {
    let target = target as u128;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut side = (target as f64).sqrt() as u128;
    while side * side < target {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= target {
        side -= 1;
    }
    usize::try_from(side).unwrap_or(usize::MAX)
}

/// Saturating conversion for cell counts computed in wide arithmetic.
#[must_use]
pub fn saturating_count(n: u128) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
