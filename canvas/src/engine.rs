//! Selection engine: routes pointer, wheel, and key events through the gesture
//! state machine into the selection store and viewport.
//!
//! Every handler runs to completion synchronously and returns the [`Action`]s
//! the host should apply (redraw, cursor change, selection diff). The engine
//! never draws; renderers read [`Engine::selection`], [`Engine::occupancy`],
//! [`Engine::camera`], and [`Engine::preview`] after a `RenderNeeded`.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::sync::Arc;

use uuid::Uuid;

use crate::camera::{Camera, Point};
use crate::config::{ConfigError, EngineConfig};
use crate::consts::CURSOR_PANNING;
use crate::cost::total_cost;
use crate::grid::{Cell, CellRect};
use crate::handoff::{HandoffError, HandoffRecord};
use crate::input::{Button, InputState, Key, SelectMode, Tool, UiState, WheelDelta};
use crate::occupancy::{Claim, OccupancyError, OccupancyIndex};
use crate::selection::{FillReport, SelectionStore};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Cells newly added to the selection, in insertion order.
    CellsAdded(Vec<Cell>),
    /// The selection was emptied.
    SelectionCleared,
    /// The rectangle preview moved, appeared, or (`None`) went away.
    PreviewChanged(Option<CellRect>),
    /// Pan or zoom changed.
    CameraChanged(Camera),
    /// Selected count or total price changed.
    CostChanged { cells: usize, total: f64 },
    SetCursor(String),
    RenderNeeded,
}

/// Startup failure: the engine refuses to run on a bad config or claim list.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid engine config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid occupancy claims: {0}")]
    Occupancy(#[from] OccupancyError),
}

/// Attempted to switch to a selection mode this deployment disables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("selection mode {0:?} is not enabled")]
pub struct ModeError(pub SelectMode);

/// One interactive selection session.
pub struct Engine {
    session: Uuid,
    config: EngineConfig,
    occupancy: Arc<OccupancyIndex>,
    selection: SelectionStore,
    camera: Camera,
    ui: UiState,
    input: InputState,
}

impl Engine {
    /// Validate `config`, index `claims`, and start an empty session.
    pub fn new(config: EngineConfig, claims: Vec<Claim>) -> Result<Self, EngineError> {
        config.validate()?;
        let occupancy = OccupancyIndex::build(claims, &config.grid)?;
        Ok(Self::start(config, Arc::new(occupancy))?)
    }

    /// Start an empty session over an already built occupancy index.
    pub fn with_occupancy(config: EngineConfig, occupancy: Arc<OccupancyIndex>) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::start(config, occupancy)
    }

    /// Session setup shared by both constructors. `config` is already validated.
    fn start(config: EngineConfig, occupancy: Arc<OccupancyIndex>) -> Result<Self, ConfigError> {
        let mode = config.modes.first_enabled().ok_or(ConfigError::NoModesEnabled)?;
        let ui = UiState {
            tool: Tool::Select,
            mode,
            block_size: config.default_block_size,
            lease_years: config.lease.default_years,
        };
        let selection = SelectionStore::new(config.grid, config.capacity, Arc::clone(&occupancy));
        let session = Uuid::new_v4();
        tracing::debug!(
            session = %session,
            cols = config.grid.cols,
            rows = config.grid.rows,
            capacity = config.capacity,
            occupied = occupancy.len(),
            "selection session started"
        );
        Ok(Self { session, config, occupancy, selection, camera: Camera::default(), ui, input: InputState::Idle })
    }

    // --- Tool / mode / sidebar ---

    /// Switch tool. Any gesture in progress is abandoned without committing.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        self.ui.tool = tool;
        tracing::debug!(session = %self.session, ?tool, "tool changed");
        actions.push(Action::SetCursor(tool.cursor().to_string()));
        actions
    }

    /// Switch selection mode. Any gesture in progress is abandoned without committing.
    pub fn set_mode(&mut self, mode: SelectMode) -> Result<Vec<Action>, ModeError> {
        if !self.config.modes.allows(mode) {
            return Err(ModeError(mode));
        }
        let actions = self.cancel_gesture();
        self.ui.mode = mode;
        tracing::debug!(session = %self.session, ?mode, "selection mode changed");
        Ok(actions)
    }

    /// Set the auto-block target. Zero is raised to one. Returns the value in effect.
    pub fn set_block_size(&mut self, cells: usize) -> usize {
        self.ui.block_size = cells.max(1);
        self.ui.block_size
    }

    /// Set the lease length, clamped to the configured range. Returns the value in effect.
    pub fn set_lease_years(&mut self, years: u32) -> u32 {
        self.ui.lease_years = self.config.lease.clamp(years);
        self.ui.lease_years
    }

    /// Remove every selected cell.
    pub fn clear(&mut self) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        let removed = self.selection.clear();
        tracing::info!(session = %self.session, removed, "selection cleared");
        if removed > 0 {
            actions.push(Action::SelectionCleared);
            actions.push(self.cost_action());
            push_render(&mut actions);
        }
        actions
    }

    /// Pan so the whole grid is centered in a viewport of the given CSS size.
    pub fn center_in_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        let span = self.config.grid.cell_size * self.camera.zoom;
        self.camera.pan_x = width * 0.5 - f64::from(self.config.grid.cols) * span * 0.5;
        self.camera.pan_y = height * 0.5 - f64::from(self.config.grid.rows) * span * 0.5;
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        let mut actions = self.finish_gesture();

        if button == Button::Middle || (button == Button::Primary && self.ui.tool == Tool::Pan) {
            self.input = InputState::Panning {
                start_screen: screen,
                start_pan: Point::new(self.camera.pan_x, self.camera.pan_y),
            };
            actions.push(Action::SetCursor(CURSOR_PANNING.to_string()));
            return actions;
        }
        if button != Button::Primary {
            return actions;
        }

        let cell = self.cell_at(screen);
        match self.ui.mode {
            SelectMode::Paint => {
                self.input = InputState::PaintDragging { last_cell: cell };
                actions.extend(self.paint(cell));
            }
            SelectMode::Rectangle => {
                self.input = InputState::RectangleDragging { anchor: cell, current: cell };
                actions.push(Action::PreviewChanged(self.input.preview()));
                push_render(&mut actions);
            }
            SelectMode::AutoBlock => {
                let report = self.selection.add_auto_block(cell, self.ui.block_size);
                actions.extend(self.apply_fill("auto_block", report));
            }
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { start_screen, start_pan } => {
                self.camera.pan_x = start_pan.x + (screen.x - start_screen.x);
                self.camera.pan_y = start_pan.y + (screen.y - start_screen.y);
                vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
            }
            InputState::PaintDragging { last_cell } => {
                let cell = self.cell_at(screen);
                if cell == last_cell {
                    return Vec::new();
                }
                self.input = InputState::PaintDragging { last_cell: cell };
                self.paint(cell)
            }
            InputState::RectangleDragging { anchor, current } => {
                let cell = self.cell_at(screen);
                if cell == current {
                    return Vec::new();
                }
                self.input = InputState::RectangleDragging { anchor, current: cell };
                vec![Action::PreviewChanged(self.input.preview()), Action::RenderNeeded]
            }
        }
    }

    /// Release inside the surface. A rectangle drag commits at the release cell.
    pub fn on_pointer_up(&mut self, screen: Point) -> Vec<Action> {
        if let InputState::RectangleDragging { anchor, .. } = self.input {
            self.input = InputState::RectangleDragging { anchor, current: self.cell_at(screen) };
        }
        self.finish_gesture()
    }

    /// Release outside the surface. Behaves like a release at the last tracked position.
    pub fn on_pointer_up_outside(&mut self) -> Vec<Action> {
        self.finish_gesture()
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        if !self.camera.apply_wheel(delta.dy, self.config.zoom) {
            return Vec::new();
        }
        tracing::trace!(session = %self.session, zoom = self.camera.zoom, "zoom changed");
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    /// Escape abandons the gesture in progress.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() {
            return self.cancel_gesture();
        }
        Vec::new()
    }

    // --- Handoff ---

    /// Finalize the selection into a handoff record and start over with an
    /// empty store. The engine keeps no copy of the handed-off cells.
    pub fn take_handoff(&mut self) -> Result<HandoffRecord, HandoffError> {
        self.input = InputState::Idle;
        let Some(anchor) = self.selection.anchor() else {
            return Err(HandoffError::EmptySelection);
        };
        let record = HandoffRecord {
            selection: anchor.into(),
            area: self.selection.len(),
            duration: self.ui.lease_years,
            total_cost: self.total_cost(),
            price_per_px: self.config.price_per_cell,
        };
        self.selection = self.selection.fresh();
        tracing::info!(
            session = %self.session,
            area = record.area,
            duration = record.duration,
            total_cost = record.total_cost,
            "selection finalized"
        );
        Ok(record)
    }

    // --- Queries ---

    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    #[must_use]
    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[must_use]
    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    /// Rectangle being dragged out, if any. Visual only; not yet selected.
    #[must_use]
    pub fn preview(&self) -> Option<CellRect> {
        self.input.preview()
    }

    /// Price of the current selection.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        total_cost(self.selection.len(), self.config.price_per_cell)
    }

    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        self.camera.zoom_percent()
    }

    /// Grid cell under a screen point, not bounds-checked.
    #[must_use]
    pub fn cell_at(&self, screen: Point) -> Cell {
        self.camera.screen_to_cell(screen, self.config.grid.cell_size)
    }

    // --- Internals ---

    fn paint(&mut self, cell: Cell) -> Vec<Action> {
        let before = self.selection.len();
        let outcome = self.selection.try_add_cell(cell);
        if self.selection.len() > before {
            return self.selection_changed(vec![cell]);
        }
        if !outcome.is_accepted() {
            tracing::trace!(session = %self.session, x = cell.x, y = cell.y, ?outcome, "cell rejected");
        }
        Vec::new()
    }

    fn apply_fill(&self, kind: &'static str, report: FillReport) -> Vec<Action> {
        if report.truncated() {
            tracing::warn!(
                session = %self.session,
                kind,
                added = report.added_count(),
                skipped = report.capacity_skipped,
                capacity = self.selection.capacity(),
                "fill truncated at capacity"
            );
        }
        tracing::debug!(
            session = %self.session,
            kind,
            added = report.added_count(),
            occupied = report.occupied,
            out_of_bounds = report.out_of_bounds,
            "fill applied"
        );
        self.selection_changed(report.added)
    }

    fn selection_changed(&self, added: Vec<Cell>) -> Vec<Action> {
        if added.is_empty() {
            return Vec::new();
        }
        vec![Action::CellsAdded(added), self.cost_action(), Action::RenderNeeded]
    }

    fn cost_action(&self) -> Action {
        Action::CostChanged { cells: self.selection.len(), total: self.total_cost() }
    }

    /// End the current gesture normally, committing a pending rectangle.
    fn finish_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::PaintDragging { .. } => {
                tracing::debug!(session = %self.session, cells = self.selection.len(), "paint stroke finished");
                Vec::new()
            }
            InputState::Panning { .. } => vec![Action::SetCursor(self.ui.tool.cursor().to_string())],
            InputState::RectangleDragging { anchor, current } => {
                let report = self.selection.try_add_rectangle(anchor, current);
                let mut actions = vec![Action::PreviewChanged(None)];
                actions.extend(self.apply_fill("rectangle", report));
                push_render(&mut actions);
                actions
            }
        }
    }

    /// End the current gesture without committing anything.
    fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::PaintDragging { .. } => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor(self.ui.tool.cursor().to_string())],
            InputState::RectangleDragging { .. } => {
                tracing::debug!(session = %self.session, "rectangle drag abandoned");
                vec![Action::PreviewChanged(None), Action::RenderNeeded]
            }
        }
    }
}

fn push_render(actions: &mut Vec<Action>) {
    if !actions.contains(&Action::RenderNeeded) {
        actions.push(Action::RenderNeeded);
    }
}
