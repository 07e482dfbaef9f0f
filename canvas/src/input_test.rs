use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_cursors() {
    assert_eq!(Tool::Select.cursor(), "crosshair");
    assert_eq!(Tool::Pan.cursor(), "grab");
}

#[test]
fn tool_deserializes_snake_case() {
    let tool: Tool = serde_json::from_str("\"pan\"").unwrap();
    assert_eq!(tool, Tool::Pan);
}

// =============================================================
// SelectMode
// =============================================================

#[test]
fn mode_default_is_paint() {
    assert_eq!(SelectMode::default(), SelectMode::Paint);
}

#[test]
fn mode_deserializes_names_and_alias() {
    let m: SelectMode = serde_json::from_str("\"rectangle\"").unwrap();
    assert_eq!(m, SelectMode::Rectangle);
    let m: SelectMode = serde_json::from_str("\"auto_block\"").unwrap();
    assert_eq!(m, SelectMode::AutoBlock);
    let m: SelectMode = serde_json::from_str("\"auto\"").unwrap();
    assert_eq!(m, SelectMode::AutoBlock);
}

#[test]
fn mode_rejects_unknown_name() {
    assert!(serde_json::from_str::<SelectMode>("\"lasso\"").is_err());
}

// =============================================================
// Button / Key
// =============================================================

#[test]
fn button_default_is_primary() {
    assert_eq!(Button::default(), Button::Primary);
}

#[test]
fn escape_key_detected() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Delete".into()).is_escape());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.preview(), None);
}

#[test]
fn rectangle_drag_previews_normalized_rect() {
    let state = InputState::RectangleDragging { anchor: Cell::new(5, 1), current: Cell::new(2, 4) };
    assert!(!state.is_idle());
    assert_eq!(state.preview(), Some(CellRect { min: Cell::new(2, 1), max: Cell::new(5, 4) }));
}

#[test]
fn other_gestures_have_no_preview() {
    let paint = InputState::PaintDragging { last_cell: Cell::new(0, 0) };
    let pan = InputState::Panning { start_screen: Point::new(0.0, 0.0), start_pan: Point::new(0.0, 0.0) };
    assert_eq!(paint.preview(), None);
    assert_eq!(pan.preview(), None);
}
