//! Input model: tools, selection modes, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `SelectMode` capture what a pointer-down should do. `InputState`
//! is the gesture being tracked between pointer-down and pointer-up, carrying
//! the anchor needed to compute pan offsets or the pending rectangle on
//! release. Only one gesture is ever active, and every path out of a gesture
//! lands back on `Idle`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{CURSOR_PAN, CURSOR_SELECT};
use crate::grid::{Cell, CellRect};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Claim cells (default).
    #[default]
    Select,
    /// Drag the viewport.
    Pan,
}

impl Tool {
    /// CSS cursor shown while this tool is idle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Select => CURSOR_SELECT,
            Self::Pan => CURSOR_PAN,
        }
    }
}

/// How the select tool claims cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// Free-hand: every cell the pointer crosses is added.
    #[default]
    Paint,
    /// Drag a rectangle; committed on release.
    Rectangle,
    /// Click to drop a square block of the preset size.
    #[serde(alias = "auto")]
    AutoBlock,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button; always pans.
    Middle,
    /// Right mouse button; ignored.
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down = zoom out).
    pub dy: f64,
}

/// Persistent UI choices visible to the sidebar and renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub tool: Tool,
    pub mode: SelectMode,
    /// Auto-block target cell count.
    pub block_size: usize,
    /// Lease length in years.
    pub lease_years: u32,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the viewport.
    Panning {
        /// Screen position of the pointer-down.
        start_screen: Point,
        /// Camera pan at pointer-down; offsets are recomputed from it on every move.
        start_pan: Point,
    },
    /// The user is painting cells one by one.
    PaintDragging {
        /// Cell most recently offered to the store.
        last_cell: Cell,
    },
    /// The user is dragging out a rectangle.
    RectangleDragging {
        /// Cell under the pointer-down.
        anchor: Cell,
        /// Cell under the latest pointer position.
        current: Cell,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Rectangle being previewed, if a rectangle drag is in progress.
    #[must_use]
    pub fn preview(&self) -> Option<CellRect> {
        match self {
            Self::RectangleDragging { anchor, current } => Some(CellRect::from_corners(*anchor, *current)),
            _ => None,
        }
    }
}
