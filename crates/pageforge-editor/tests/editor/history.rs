use pageforge_editor::{ElementKind, ElementType, PageElement};

use crate::common::{editing_state, place};

#[test]
fn add_element_is_undoable_and_redoable() {
    let mut state = editing_state();
    let id = state.add_element(ElementType::Button).unwrap();
    assert!(state.store.contains(&id));

    assert!(state.undo());
    assert!(!state.store.contains(&id));
    // Undoing the add also drops it from the selection.
    assert!(state.selection.is_empty());

    assert!(state.redo());
    assert!(state.store.contains(&id));
}

#[test]
fn new_command_clears_redo_stack() {
    let mut state = editing_state();
    state.add_element(ElementType::Button);
    state.undo();
    assert!(state.can_redo());
    state.add_element(ElementType::Icon);
    assert!(!state.can_redo());
}

#[test]
fn delete_restores_exact_elements_on_undo() {
    let mut state = editing_state();
    let id = place(&mut state, ElementType::Text, 30.0, 40.0, 60.0, 20.0);
    if let Some(el) = state.store.get_mut(&id) {
        if let ElementKind::Text { content, .. } = &mut el.kind {
            *content = "hello".to_string();
        }
    }
    state.selection.select_only(id.clone());
    state.delete_selected();
    assert!(!state.store.contains(&id));

    assert!(state.undo());
    let el = state.store.get(&id).unwrap();
    assert_eq!((el.x, el.y), (30.0, 40.0));
    assert!(matches!(&el.kind, ElementKind::Text { content, .. } if content == "hello"));
}

#[test]
fn property_edit_round_trips_through_history() {
    let mut state = editing_state();
    let id = state.add_element(ElementType::Button).unwrap();
    let mut edited: PageElement = state.store.get(&id).unwrap().clone();
    edited.color = "#FF0000".to_string();
    if let ElementKind::Button { label, .. } = &mut edited.kind {
        *label = "Go".to_string();
    }
    state.update_element(edited);

    assert_eq!(state.store.get(&id).unwrap().color, "#FF0000");
    assert!(state.undo());
    assert_eq!(state.store.get(&id).unwrap().color, "#87CEEB");
    assert!(state.redo());
    assert_eq!(state.store.get(&id).unwrap().color, "#FF0000");
}

#[test]
fn unchanged_edit_records_nothing() {
    let mut state = editing_state();
    let id = state.add_element(ElementType::Button).unwrap();
    let depth = state.undo_depth();
    let unchanged = state.store.get(&id).unwrap().clone();
    state.update_element(unchanged);
    assert_eq!(state.undo_depth(), depth);
}

#[test]
fn undo_on_empty_history_reports_false() {
    let mut state = editing_state();
    assert!(!state.undo());
    assert!(!state.redo());
}
