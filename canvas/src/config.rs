//! Engine configuration: grid geometry, capacity, pricing, zoom limits, and
//! which selection modes are enabled.
//!
//! Every product variant of the selection screen is one `EngineConfig`. The
//! open canvas lets users paint freely up to a very large ceiling; the capped
//! allotment limits the claim to a small fixed count and enables rectangle
//! drags. Nothing in the engine hard-codes either variant.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BLOCK_PRESETS, DEFAULT_BLOCK_SIZE, DEFAULT_CAPPED_CAPACITY, DEFAULT_CELL_SIZE, DEFAULT_GRID_COLS,
    DEFAULT_GRID_ROWS, DEFAULT_LEASE_YEARS, DEFAULT_PRICE_PER_CELL, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN,
    MAX_LEASE_YEARS, MIN_LEASE_YEARS, OPEN_CANVAS_CAPACITY,
};
use crate::grid::{Cell, CellRect};
use crate::input::SelectMode;

/// A configuration value that the engine cannot run with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one column and one row (got {cols}x{rows})")]
    EmptyGrid { cols: u32, rows: u32 },

    #[error("cell size must be a positive finite number (got {0})")]
    InvalidCellSize(f64),

    #[error("capacity must be at least one cell")]
    ZeroCapacity,

    #[error("price per cell must be a non-negative finite number (got {0})")]
    InvalidPrice(f64),

    #[error("zoom range must satisfy 0 < min <= max (got {min}..{max})")]
    InvalidZoomRange { min: f64, max: f64 },

    #[error("at least one selection mode must be enabled")]
    NoModesEnabled,

    #[error("lease range must satisfy 1 <= min <= default <= max (got {min}..{max}, default {default})")]
    InvalidLeaseRange { min: u32, max: u32, default: u32 },

    #[error("default block size must be at least one cell")]
    ZeroBlockSize,
}

/// Grid dimensions and on-screen cell size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: u32,
    pub rows: u32,
    /// Side of one cell at zoom 1.0, in CSS pixels.
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: DEFAULT_GRID_COLS, rows: DEFAULT_GRID_ROWS, cell_size: DEFAULT_CELL_SIZE }
    }
}

impl GridConfig {
    /// Whether `cell` lies inside `[0, cols) × [0, rows)`.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..i64::from(self.cols)).contains(&cell.x) && (0..i64::from(self.rows)).contains(&cell.y)
    }

    /// The whole grid as a cell rectangle, or `None` for an empty grid.
    #[must_use]
    pub fn bounds(&self) -> Option<CellRect> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        Some(CellRect {
            min: Cell::new(0, 0),
            max: Cell::new(i64::from(self.cols) - 1, i64::from(self.rows) - 1),
        })
    }

    /// Total number of cells on the grid.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.cols) * u64::from(self.rows)
    }
}

/// Inclusive zoom scale limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self { min: DEFAULT_ZOOM_MIN, max: DEFAULT_ZOOM_MAX }
    }
}

impl ZoomRange {
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

/// Which selection modes a deployment exposes.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSet {
    pub paint: bool,
    pub rectangle: bool,
    pub auto_block: bool,
}

impl Default for ModeSet {
    fn default() -> Self {
        Self { paint: true, rectangle: true, auto_block: true }
    }
}

impl ModeSet {
    #[must_use]
    pub fn allows(&self, mode: SelectMode) -> bool {
        match mode {
            SelectMode::Paint => self.paint,
            SelectMode::Rectangle => self.rectangle,
            SelectMode::AutoBlock => self.auto_block,
        }
    }

    /// The first enabled mode, preferring paint, then rectangle, then auto-block.
    #[must_use]
    pub fn first_enabled(&self) -> Option<SelectMode> {
        [SelectMode::Paint, SelectMode::Rectangle, SelectMode::AutoBlock]
            .into_iter()
            .find(|mode| self.allows(*mode))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.paint || self.rectangle || self.auto_block)
    }
}

/// Lease length limits in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseRange {
    pub min_years: u32,
    pub max_years: u32,
    pub default_years: u32,
}

impl Default for LeaseRange {
    fn default() -> Self {
        Self { min_years: MIN_LEASE_YEARS, max_years: MAX_LEASE_YEARS, default_years: DEFAULT_LEASE_YEARS }
    }
}

impl LeaseRange {
    #[must_use]
    pub fn clamp(&self, years: u32) -> u32 {
        years.clamp(self.min_years, self.max_years)
    }
}

/// Full parameter set for one selection engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub grid: GridConfig,
    /// Maximum number of cells one user may hold.
    pub capacity: usize,
    /// Dollars per cell.
    pub price_per_cell: f64,
    pub zoom: ZoomRange,
    pub modes: ModeSet,
    /// Auto-block targets offered to the user.
    pub block_presets: Vec<usize>,
    pub default_block_size: usize,
    pub lease: LeaseRange,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::open_canvas()
    }
}

impl EngineConfig {
    /// Free-paint canvas with an effectively unlimited ceiling.
    #[must_use]
    pub fn open_canvas() -> Self {
        Self {
            grid: GridConfig::default(),
            capacity: OPEN_CANVAS_CAPACITY,
            price_per_cell: DEFAULT_PRICE_PER_CELL,
            zoom: ZoomRange::default(),
            modes: ModeSet { paint: true, rectangle: false, auto_block: true },
            block_presets: BLOCK_PRESETS.to_vec(),
            default_block_size: DEFAULT_BLOCK_SIZE,
            lease: LeaseRange::default(),
        }
    }

    /// Small fixed allotment claimed by painting or dragging rectangles.
    #[must_use]
    pub fn capped(capacity: usize) -> Self {
        Self {
            capacity,
            modes: ModeSet { paint: true, rectangle: true, auto_block: false },
            ..Self::open_canvas()
        }
    }

    /// The capped variant at its usual allotment.
    #[must_use]
    pub fn capped_default() -> Self {
        Self::capped(DEFAULT_CAPPED_CAPACITY)
    }

    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(ConfigError::EmptyGrid { cols: self.grid.cols, rows: self.grid.rows });
        }
        if !(self.grid.cell_size.is_finite() && self.grid.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.grid.cell_size));
        }
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(self.price_per_cell.is_finite() && self.price_per_cell >= 0.0) {
            return Err(ConfigError::InvalidPrice(self.price_per_cell));
        }
        let ZoomRange { min, max } = self.zoom;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidZoomRange { min, max });
        }
        if self.modes.is_empty() {
            return Err(ConfigError::NoModesEnabled);
        }
        let LeaseRange { min_years, max_years, default_years } = self.lease;
        if min_years == 0 || min_years > default_years || default_years > max_years {
            return Err(ConfigError::InvalidLeaseRange { min: min_years, max: max_years, default: default_years });
        }
        if self.default_block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }
}
