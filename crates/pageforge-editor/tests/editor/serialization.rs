use pageforge_editor::{
    ElementKind, ElementStatus, ElementType, PageDocument,
};

use crate::common::{editing_state, place};

#[test]
fn document_round_trips_through_disk() {
    let mut state = editing_state();
    state.settings.page_title = Some("Landing".to_string());
    let id = place(&mut state, ElementType::Image, 12.0, 34.0, 200.0, 300.0);
    if let Some(el) = state.store.get_mut(&id) {
        if let ElementKind::Image { src, .. } = &mut el.kind {
            *src = "https://example.com/cat.png".to_string();
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.json");
    state.save_config(&path).unwrap();

    let mut restored = editing_state();
    restored.load_config(&path, false).unwrap();

    assert_eq!(restored.page_title(), "Landing");
    assert_eq!(restored.store.len(), 1);
    let el = restored.store.get(&id).unwrap();
    assert_eq!((el.x, el.y), (12.0, 34.0));
    assert!(matches!(
        &el.kind,
        ElementKind::Image { src, .. } if src == "https://example.com/cat.png"
    ));
}

#[test]
fn imported_elements_always_start_idle() {
    let doc = PageDocument::from_json(
        r#"{"elements":[{"id":"a","type":"button","x":0,"y":0,"url":"https://x"}]}"#,
    )
    .unwrap();
    let elements = doc.into_elements();
    assert_eq!(elements[0].status, ElementStatus::Idle);
}

#[test]
fn failed_load_keeps_contents_and_notifies() {
    let mut state = editing_state();
    place(&mut state, ElementType::Button, 0.0, 0.0, 80.0, 30.0);
    let mut rx = state.notifications.subscribe();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(state.load_config(&missing, false).is_err());

    assert_eq!(state.store.len(), 1);
    assert!(matches!(
        rx.try_recv().unwrap(),
        pageforge_core::notify::Notification::ConfigLoadFailed { .. }
    ));
}

#[test]
fn explicit_load_falls_back_to_error_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("error.json"),
        r#"{"pageTitle":"Not Found","elements":[]}"#,
    )
    .unwrap();

    let mut state = editing_state();
    let missing = dir.path().join("alternate.json");
    state.load_config(&missing, true).unwrap();
    assert_eq!(state.page_title(), "Not Found");
}

#[test]
fn implicit_load_skips_error_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("error.json"),
        r#"{"pageTitle":"Not Found","elements":[]}"#,
    )
    .unwrap();

    let mut state = editing_state();
    let missing = dir.path().join("page.json");
    assert!(state.load_config(&missing, false).is_err());
    assert_eq!(state.page_title(), "Untitled Page");
}

#[test]
fn loading_a_document_resets_history_and_selection() {
    let mut state = editing_state();
    state.add_element(ElementType::Button);
    assert!(state.can_undo());

    let doc = PageDocument::from_json(r#"{"elements":[]}"#).unwrap();
    state.apply_document(doc);

    assert!(!state.can_undo());
    assert!(state.selection.is_empty());
    assert!(state.store.is_empty());
}

#[test]
fn export_then_import_preserves_stacking() {
    let mut state = editing_state();
    let a = place(&mut state, ElementType::Button, 0.0, 0.0, 10.0, 10.0);
    let b = place(&mut state, ElementType::Button, 0.0, 0.0, 10.0, 10.0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.json");
    state.save_config(&path).unwrap();

    let mut restored = editing_state();
    restored.load_config(&path, false).unwrap();
    assert_eq!(restored.store.get(&a).unwrap().z_index, 1);
    assert_eq!(restored.store.get(&b).unwrap().z_index, 2);
}
