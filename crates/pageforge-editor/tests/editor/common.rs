//! Shared helpers for the integration tests.

use pageforge_editor::{EditorState, ElementId, ElementType, PageElement};

/// An editor unlocked into edit mode with the default password.
pub fn editing_state() -> EditorState {
    let mut state = EditorState::new();
    state.request_edit_mode();
    assert!(state.submit_password("admin"));
    state
}

/// Place an element directly in the store with a known box, bypassing
/// history, and record its measurement.
pub fn place(
    state: &mut EditorState,
    ty: ElementType,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> ElementId {
    let mut el = PageElement::new(ty, x, y);
    el.z_index = state.store.max_z_index() + 1;
    let id = el.id.clone();
    state.store.insert(el);
    state.measurements.record(id.clone(), width, height);
    id
}

/// Current position of an element.
pub fn pos(state: &EditorState, id: &ElementId) -> (f64, f64) {
    let el = state.store.get(id).unwrap();
    (el.x, el.y)
}

/// Current z-index of an element.
pub fn z_of(state: &EditorState, id: &ElementId) -> i32 {
    state.store.get(id).unwrap().z_index
}
