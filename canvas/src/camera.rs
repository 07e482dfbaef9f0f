#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::config::ZoomRange;
use crate::consts::ZOOM_WHEEL_FACTOR;
use crate::grid::Cell;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport transform for the pixel grid.
///
/// `pan_x` / `pan_y` are the screen position of the grid origin in CSS pixels.
/// `zoom` is a scale factor (1.0 = one cell is `cell_size` pixels wide).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Map a screen-space point to the grid cell beneath it.
    ///
    /// The result is not bounds-checked; cells left of or above the grid come
    /// back negative. Each call recomputes from the current transform, so equal
    /// inputs always map to the same cell.
    #[must_use]
    pub fn screen_to_cell(&self, screen: Point, cell_size: f64) -> Cell {
        let span = cell_size * self.zoom;
        Cell::new(floor_to_i64((screen.x - self.pan_x) / span), floor_to_i64((screen.y - self.pan_y) / span))
    }

    /// Screen position of the top-left corner of `cell`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_to_screen(&self, cell: Cell, cell_size: f64) -> Point {
        self.world_to_screen(Point::new(cell.x as f64 * cell_size, cell.y as f64 * cell_size))
    }

    /// Apply a vertical wheel delta as a uniform scale change.
    ///
    /// Zoom is anchored at the current pan offset, not at the pointer. Returns
    /// `true` when the scale actually changed.
    pub fn apply_wheel(&mut self, dy: f64, range: ZoomRange) -> bool {
        if !dy.is_finite() {
            return false;
        }
        let next = range.clamp(self.zoom - dy * ZOOM_WHEEL_FACTOR);
        #[allow(clippy::float_cmp)]
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    /// Zoom as a whole percentage for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round().max(0.0) as u32
    }
}

/// Floor toward negative infinity and saturate into `i64`. NaN maps to 0.
#[allow(clippy::cast_possible_truncation)]
fn floor_to_i64(value: f64) -> i64 {
    value.floor() as i64
}
