use pageforge_editor::{ClickAction, ElementStatus, ElementType, PageElement};

use crate::common::{editing_state, place};

fn url_element(state: &mut pageforge_editor::EditorState, ty: ElementType) -> pageforge_editor::ElementId {
    let mut el = PageElement::new(ty, 0.0, 0.0);
    *el.kind.url_mut() = Some("https://example.com/api".to_string());
    let id = el.id.clone();
    state.store.insert(el);
    id
}

#[test]
fn text_element_clicks_navigate() {
    let mut state = pageforge_editor::EditorState::new();
    let id = url_element(&mut state, ElementType::Text);
    assert_eq!(
        state.classify_click(&id),
        ClickAction::Navigate("https://example.com/api".to_string())
    );
}

#[test]
fn button_element_clicks_fetch() {
    let mut state = pageforge_editor::EditorState::new();
    let id = url_element(&mut state, ElementType::Button);
    assert_eq!(
        state.classify_click(&id),
        ClickAction::Fetch("https://example.com/api".to_string())
    );
}

#[test]
fn clicks_do_nothing_in_edit_mode() {
    let mut state = editing_state();
    let id = url_element(&mut state, ElementType::Button);
    assert_eq!(state.classify_click(&id), ClickAction::None);
}

#[test]
fn element_without_url_is_inert() {
    let mut state = pageforge_editor::EditorState::new();
    let id = place(&mut state, ElementType::Button, 0.0, 0.0, 80.0, 30.0);
    assert_eq!(state.classify_click(&id), ClickAction::None);
}

#[test]
fn loading_element_ignores_further_clicks() {
    let mut state = pageforge_editor::EditorState::new();
    let id = url_element(&mut state, ElementType::Button);
    state.begin_action(&id);
    assert_eq!(state.classify_click(&id), ClickAction::None);
}

#[test]
fn status_is_per_element() {
    let mut state = pageforge_editor::EditorState::new();
    let busy = url_element(&mut state, ElementType::Button);
    let idle = url_element(&mut state, ElementType::Icon);
    state.begin_action(&busy);
    assert_eq!(state.classify_click(&busy), ClickAction::None);
    assert!(matches!(state.classify_click(&idle), ClickAction::Fetch(_)));
}

#[test]
fn failed_action_publishes_notification() {
    let mut state = pageforge_editor::EditorState::new();
    let mut rx = state.notifications.subscribe();
    let id = url_element(&mut state, ElementType::Button);
    state.begin_action(&id);
    state.finish_action(&id, Err("status 500".to_string()));
    assert_eq!(state.store.get(&id).unwrap().status, ElementStatus::Error);
    assert!(rx.try_recv().is_ok());
}

#[test]
fn revert_touches_only_terminal_states() {
    let mut state = pageforge_editor::EditorState::new();
    let id = url_element(&mut state, ElementType::Button);
    state.begin_action(&id);
    // A revert racing an in-flight request must not clear Loading.
    state.revert_status(&id);
    assert_eq!(state.store.get(&id).unwrap().status, ElementStatus::Loading);

    state.finish_action(&id, Ok(()));
    assert_eq!(state.store.get(&id).unwrap().status, ElementStatus::Success);
    state.revert_status(&id);
    assert_eq!(state.store.get(&id).unwrap().status, ElementStatus::Idle);
}
