use pageforge_core::geometry::Point;
use pageforge_editor::{ElementKind, ElementType, Gesture};

use crate::common::{editing_state, place, pos};

#[test]
fn drag_moves_whole_selection_by_shared_delta() {
    let mut state = editing_state();
    let a = place(&mut state, ElementType::Button, 10.0, 10.0, 80.0, 30.0);
    let b = place(&mut state, ElementType::Text, 100.0, 50.0, 60.0, 20.0);
    state.selection.set(vec![a.clone(), b.clone()]);

    state.drag_start(a.clone(), Point::new(15.0, 15.0), false);
    state.drag_move(Point::new(40.0, 35.0));
    state.drag_end();

    assert_eq!(pos(&state, &a), (35.0, 30.0));
    assert_eq!(pos(&state, &b), (125.0, 70.0));
    // The whole drag undoes as one step.
    assert!(state.undo());
    assert_eq!(pos(&state, &a), (10.0, 10.0));
    assert_eq!(pos(&state, &b), (100.0, 50.0));
}

#[test]
fn plain_press_on_unselected_element_makes_it_sole_selection() {
    let mut state = editing_state();
    let a = place(&mut state, ElementType::Button, 0.0, 0.0, 80.0, 30.0);
    let b = place(&mut state, ElementType::Button, 200.0, 0.0, 80.0, 30.0);
    state.selection.set(vec![a.clone()]);

    state.drag_start(b.clone(), Point::new(210.0, 5.0), false);
    assert_eq!(state.selection.ids(), &[b]);
    let _ = a;
}

#[test]
fn shift_press_toggles_membership() {
    let mut state = editing_state();
    let a = place(&mut state, ElementType::Button, 0.0, 0.0, 80.0, 30.0);
    let b = place(&mut state, ElementType::Button, 200.0, 0.0, 80.0, 30.0);
    state.selection.set(vec![a.clone()]);

    state.drag_start(b.clone(), Point::new(210.0, 5.0), true);
    assert!(state.selection.is_selected(&a));
    assert!(state.selection.is_selected(&b));

    // Shift again deselects and no drag begins.
    state.end_gesture();
    state.drag_start(b.clone(), Point::new(210.0, 5.0), true);
    assert!(!state.selection.is_selected(&b));
    assert_eq!(state.gesture, Gesture::Idle);
}

#[test]
fn zero_movement_drag_records_no_history() {
    let mut state = editing_state();
    let a = place(&mut state, ElementType::Icon, 5.0, 5.0, 24.0, 24.0);
    state.drag_start(a, Point::new(10.0, 10.0), false);
    state.drag_end();
    assert!(!state.can_undo());
}

#[test]
fn cancelled_drag_snaps_elements_back() {
    let mut state = editing_state();
    let a = place(&mut state, ElementType::Button, 10.0, 10.0, 80.0, 30.0);
    state.drag_start(a.clone(), Point::new(10.0, 10.0), false);
    state.drag_move(Point::new(60.0, 60.0));
    state.end_gesture();
    assert_eq!(pos(&state, &a), (10.0, 10.0));
    assert!(!state.can_undo());
}

#[test]
fn resize_is_horizontal_and_aspect_locked() {
    let mut state = editing_state();
    let id = place(&mut state, ElementType::Image, 0.0, 0.0, 200.0, 300.0);
    if let Some(el) = state.store.get_mut(&id) {
        if let ElementKind::Image { aspect_ratio, .. } = &mut el.kind {
            *aspect_ratio = Some(2.0);
        }
    }
    state.resize_start(id.clone(), Point::new(200.0, 100.0));
    // Vertical movement is ignored; only the 40px of horizontal counts.
    state.resize_move(Point::new(240.0, 500.0));
    state.resize_end();

    let el = state.store.get(&id).unwrap();
    assert_eq!(el.explicit_size(), Some((240.0, 120.0)));
}

#[test]
fn resize_clamps_to_minimum_dimension() {
    let mut state = editing_state();
    let id = place(&mut state, ElementType::Image, 0.0, 0.0, 200.0, 300.0);
    if let Some(el) = state.store.get_mut(&id) {
        if let ElementKind::Image { aspect_ratio, .. } = &mut el.kind {
            *aspect_ratio = Some(1.0);
        }
    }
    state.resize_start(id.clone(), Point::new(200.0, 0.0));
    state.resize_move(Point::new(-500.0, 0.0));
    state.resize_end();
    assert_eq!(
        state.store.get(&id).unwrap().explicit_size(),
        Some((20.0, 20.0))
    );
}

#[test]
fn resize_before_image_load_is_ignored() {
    let mut state = editing_state();
    let id = place(&mut state, ElementType::Image, 0.0, 0.0, 200.0, 300.0);
    // aspect_ratio is still None.
    state.resize_start(id, Point::new(200.0, 0.0));
    assert_eq!(state.gesture, Gesture::Idle);
}

#[test]
fn marquee_selects_overlapping_elements_only() {
    let mut state = editing_state();
    let inside = place(&mut state, ElementType::Button, 10.0, 10.0, 30.0, 30.0);
    let outside = place(&mut state, ElementType::Button, 500.0, 500.0, 30.0, 30.0);
    // Shares only an edge with the marquee; a strict overlap is required.
    let edge = place(&mut state, ElementType::Button, 100.0, 0.0, 30.0, 30.0);

    state.marquee_start(Point::new(0.0, 0.0), false);
    state.marquee_move(Point::new(100.0, 100.0));
    state.marquee_end();

    assert!(state.selection.is_selected(&inside));
    assert!(!state.selection.is_selected(&outside));
    assert!(!state.selection.is_selected(&edge));
}

#[test]
fn additive_marquee_extends_existing_selection() {
    let mut state = editing_state();
    let kept = place(&mut state, ElementType::Button, 500.0, 500.0, 30.0, 30.0);
    let hit = place(&mut state, ElementType::Button, 10.0, 10.0, 30.0, 30.0);
    state.selection.select_only(kept.clone());

    state.marquee_start(Point::new(0.0, 0.0), true);
    state.marquee_move(Point::new(50.0, 50.0));
    state.marquee_end();

    assert!(state.selection.is_selected(&kept));
    assert!(state.selection.is_selected(&hit));
}

#[test]
fn non_additive_marquee_clears_selection_at_start() {
    let mut state = editing_state();
    let old = place(&mut state, ElementType::Button, 500.0, 500.0, 30.0, 30.0);
    state.selection.select_only(old.clone());
    state.marquee_start(Point::new(0.0, 0.0), false);
    assert!(state.selection.is_empty());
}

#[test]
fn unmeasured_elements_are_invisible_to_marquee() {
    let mut state = editing_state();
    let id = state.add_element(ElementType::Text).unwrap();
    // No measurement recorded for the new element.
    state.marquee_start(Point::new(0.0, 0.0), false);
    state.marquee_move(Point::new(1000.0, 1000.0));
    state.marquee_end();
    assert!(!state.selection.is_selected(&id));
}

#[test]
fn nudge_moves_selection_one_pixel_and_is_undoable() {
    let mut state = editing_state();
    let id = place(&mut state, ElementType::Icon, 50.0, 50.0, 24.0, 24.0);
    state.selection.select_only(id.clone());
    state.nudge_selection(1.0, 0.0);
    state.nudge_selection(0.0, -1.0);
    assert_eq!(pos(&state, &id), (51.0, 49.0));
    assert!(state.undo());
    assert_eq!(pos(&state, &id), (51.0, 50.0));
}
