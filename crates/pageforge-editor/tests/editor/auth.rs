use pageforge_core::notify::Notification;
use pageforge_editor::{EditorState, ElementType, GateState};

use crate::common::{editing_state, place};

#[test]
fn configured_password_overrides_default() {
    let mut state = EditorState::new();
    state.settings.editor_password = Some("hunter2".to_string());
    state.request_edit_mode();
    assert!(!state.submit_password("admin"));
    assert!(state.submit_password("hunter2"));
    assert!(state.is_editing());
}

#[test]
fn wrong_password_publishes_notification_and_keeps_prompt() {
    let mut state = EditorState::new();
    state.request_edit_mode();
    let mut rx = state.notifications.subscribe();
    assert!(!state.submit_password("wrong"));
    assert_eq!(state.gate.state(), GateState::Prompting);
    assert_eq!(rx.try_recv().unwrap(), Notification::AuthenticationFailed);
}

#[test]
fn leaving_edit_mode_clears_selection_but_not_auth() {
    let mut state = editing_state();
    let id = place(&mut state, ElementType::Button, 0.0, 0.0, 80.0, 30.0);
    state.selection.select_only(id);
    state.leave_edit_mode();
    assert!(state.selection.is_empty());
    assert_eq!(state.gate.state(), GateState::ViewMode);
    // Re-entering edit mode needs no password.
    state.request_edit_mode();
    assert!(state.is_editing());
}

#[test]
fn url_credentials_authenticate_into_view_mode() {
    let mut state = EditorState::new();
    state.settings.editor_password = Some("hunter2".to_string());

    assert!(state.authenticate_from_url("hunter2", false));
    assert_eq!(state.gate.state(), GateState::ViewMode);
    assert!(!state.is_editing());
    // Edit mode afterwards needs no prompt.
    state.request_edit_mode();
    assert!(state.is_editing());
}

#[test]
fn url_credentials_with_edit_flag_enter_edit_mode() {
    let mut state = EditorState::new();
    assert!(state.authenticate_from_url("admin", true));
    assert!(state.is_editing());
}

#[test]
fn wrong_url_credentials_notify_and_stay_locked() {
    let mut state = EditorState::new();
    let mut rx = state.notifications.subscribe();
    assert!(!state.authenticate_from_url("wrong", true));
    assert_eq!(state.gate.state(), GateState::Locked);
    assert_eq!(rx.try_recv().unwrap(), Notification::AuthenticationFailed);
}

#[test]
fn mutations_are_ignored_outside_edit_mode() {
    let mut state = EditorState::new();
    assert_eq!(state.add_element(ElementType::Button), None);
    assert!(state.store.is_empty());
}
