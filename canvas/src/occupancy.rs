//! Occupancy index: grid cells already claimed by third parties.
//!
//! The index is built once per session from a list of rectangular claims and
//! never changes afterwards. Every covered cell is expanded into a hash set so
//! membership is a single lookup on the hot paint path. A claim that does not
//! describe real grid cells fails the build, since the whole session relies on
//! this set to keep user selections off taken ground.

#[cfg(test)]
#[path = "occupancy_test.rs"]
mod occupancy_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::grid::{Cell, CellRect};

/// A claim rectangle that cannot be indexed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OccupancyError {
    #[error("claim {id} has zero area ({w}x{h})")]
    EmptyClaim { id: u32, w: u32, h: u32 },

    #[error("claim {id} at ({x}, {y}) size {w}x{h} extends outside the {cols}x{rows} grid")]
    OutOfBounds { id: u32, x: i64, y: i64, w: u32, h: u32, cols: u32, rows: u32 },
}

/// A rectangle of cells owned by someone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: u32,
    /// Owner name shown by the renderer.
    #[serde(default)]
    pub name: String,
    /// Left column.
    pub x: i64,
    /// Top row.
    pub y: i64,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
    /// Fill color as `0xRRGGBB`.
    #[serde(default)]
    pub color: u32,
}

impl Claim {
    /// Covered cells as an inclusive rectangle, or `None` for a zero-area claim.
    #[must_use]
    pub fn rect(&self) -> Option<CellRect> {
        if self.w == 0 || self.h == 0 {
            return None;
        }
        Some(CellRect {
            min: Cell::new(self.x, self.y),
            max: Cell::new(
                self.x.saturating_add(i64::from(self.w) - 1),
                self.y.saturating_add(i64::from(self.h) - 1),
            ),
        })
    }
}

/// Read-only set of occupied cells plus the claims they came from.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    cells: HashSet<Cell>,
    claims: Vec<Claim>,
}

impl OccupancyIndex {
    /// An index with nothing occupied.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Expand every claim into its cells.
    ///
    /// Claims may abut or overlap; overlapping claims simply union. A claim with
    /// zero area or any cell outside `grid` is rejected.
    pub fn build(claims: Vec<Claim>, grid: &GridConfig) -> Result<Self, OccupancyError> {
        let mut cells = HashSet::new();
        for claim in &claims {
            let Some(rect) = claim.rect() else {
                return Err(OccupancyError::EmptyClaim { id: claim.id, w: claim.w, h: claim.h });
            };
            if !(grid.contains(rect.min) && grid.contains(rect.max)) {
                return Err(OccupancyError::OutOfBounds {
                    id: claim.id,
                    x: claim.x,
                    y: claim.y,
                    w: claim.w,
                    h: claim.h,
                    cols: grid.cols,
                    rows: grid.rows,
                });
            }
            cells.extend(rect.cells());
        }
        tracing::debug!(claims = claims.len(), cells = cells.len(), "occupancy index built");
        Ok(Self { cells, claims })
    }

    /// Whether `cell` belongs to an existing claim.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The claim covering `cell`, if any.
    #[must_use]
    pub fn claim_at(&self, cell: Cell) -> Option<&Claim> {
        self.claims
            .iter()
            .find(|claim| claim.rect().is_some_and(|rect| rect.contains(cell)))
    }

    /// Claims in the order they were supplied.
    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Number of distinct occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The brand blocks pre-claimed on the demo canvas.
#[must_use]
pub fn sample_claims() -> Vec<Claim> {
    let claim = |id, name: &str, x, y, w, h, color| Claim { id, name: name.to_string(), x, y, w, h, color };
    vec![
        claim(1, "OpenAI", 20, 15, 10, 5, 0x10_a3_7f),
        claim(2, "SpaceX", 2, 2, 8, 8, 0x00_00_00),
        claim(3, "Nike", 32, 5, 6, 6, 0xfa_54_00),
        claim(4, "McDonald's", 5, 25, 5, 5, 0xff_c7_2c),
        claim(5, "Ethereum", 40, 20, 5, 8, 0x62_7e_ea),
        claim(6, "Duolingo", 15, 30, 4, 4, 0x58_cc_02),
    ]
}
