//! Shared numeric constants for the canvas crate.

// ── Grid ────────────────────────────────────────────────────────

/// Screen size of one grid cell at zoom 1.0, in CSS pixels.
pub const DEFAULT_CELL_SIZE: f64 = 20.0;

/// Default grid width in cells.
pub const DEFAULT_GRID_COLS: u32 = 100;

/// Default grid height in cells.
pub const DEFAULT_GRID_ROWS: u32 = 100;

// ── Selection ───────────────────────────────────────────────────

/// Capacity of the open canvas variant (effectively unlimited for a 100×100 grid).
pub const OPEN_CANVAS_CAPACITY: usize = 1_000_000;

/// Capacity of the capped allotment variant.
pub const DEFAULT_CAPPED_CAPACITY: usize = 100;

/// Auto-block target counts offered to the user.
pub const BLOCK_PRESETS: [usize; 5] = [100, 200, 500, 1000, 2500];

/// Auto-block target count selected on entry.
pub const DEFAULT_BLOCK_SIZE: usize = 100;

// ── Pricing ─────────────────────────────────────────────────────

/// Price of one cell in dollars.
pub const DEFAULT_PRICE_PER_CELL: f64 = 0.10;

/// Shortest lease offered, in years.
pub const MIN_LEASE_YEARS: u32 = 1;

/// Longest lease offered, in years.
pub const MAX_LEASE_YEARS: u32 = 10;

/// Lease length selected on entry, in years.
pub const DEFAULT_LEASE_YEARS: u32 = 3;

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed zoom scale.
pub const DEFAULT_ZOOM_MIN: f64 = 0.2;

/// Largest allowed zoom scale.
pub const DEFAULT_ZOOM_MAX: f64 = 3.0;

/// Scale change per unit of vertical wheel delta.
pub const ZOOM_WHEEL_FACTOR: f64 = 0.001;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown while the select tool is active.
pub const CURSOR_SELECT: &str = "crosshair";

/// Cursor shown while the pan tool is active.
pub const CURSOR_PAN: &str = "grab";

/// Cursor shown during an active pan drag.
pub const CURSOR_PANNING: &str = "grabbing";

// ── Handoff ─────────────────────────────────────────────────────

/// Well-known key the handoff record is stored under.
pub const HANDOFF_KEY: &str = "pixelOrder";
