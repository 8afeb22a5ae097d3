//! Input routing.
//!
//! The host translates raw UI events into [`InputEvent`]s and feeds them
//! through the [`InteractionDispatcher`], which converts viewport
//! coordinates to page space, runs the gesture state machines, and applies
//! keyboard shortcuts. Long presses are host-timed: the dispatcher records
//! the pending press and the host delivers [`InputEvent::LongPressElapsed`]
//! when the hold duration passes.

use tracing::trace;

use pageforge_core::constants::TOUCH_SLOP_PX;
use pageforge_core::geometry::Point;

use crate::clipboard::ClipboardProvider;
use crate::editor_state::{EditorState, Gesture};
use crate::model::ElementId;

/// What a pointer event landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas.
    Canvas,
    /// An element's body.
    Element(ElementId),
    /// An image element's resize handle.
    ResizeHandle(ElementId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Backspace,
    Escape,
    C,
    V,
    A,
    Z,
}

/// A host input event, positions in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        target: PointerTarget,
        position: Point,
        button: PointerButton,
        shift: bool,
    },
    PointerMove {
        position: Point,
    },
    PointerUp {
        position: Point,
    },
    TouchStart {
        target: PointerTarget,
        position: Point,
    },
    TouchMove {
        position: Point,
    },
    TouchEnd {
        position: Point,
    },
    /// The host's long-press timer fired.
    LongPressElapsed,
    KeyDown {
        key: Key,
        ctrl: bool,
        shift: bool,
    },
    ContextMenu {
        position: Point,
        element: Option<ElementId>,
    },
}

/// What the host should do after dispatching an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing further; state has been updated.
    Handled,
    /// A view-mode click landed on an element; classify it and act.
    ClickElement(ElementId),
}

/// A touch press waiting out the long-press hold.
#[derive(Debug, Clone, PartialEq)]
struct PendingPress {
    id: ElementId,
    position: Point,
}

/// Routes host input into the editor state.
pub struct InteractionDispatcher {
    /// Viewport position of the canvas's page origin.
    canvas_origin: Point,
    scroll_offset: Point,
    /// Last pointer position seen, in page space.
    pointer: Point,
    pending_long_press: Option<PendingPress>,
    /// Element under the most recent primary press, for click detection.
    pressed: Option<ElementId>,
    clipboard: Box<dyn ClipboardProvider>,
}

impl InteractionDispatcher {
    pub fn new(clipboard: Box<dyn ClipboardProvider>) -> Self {
        InteractionDispatcher {
            canvas_origin: Point::default(),
            scroll_offset: Point::default(),
            pointer: Point::default(),
            pending_long_press: None,
            pressed: None,
            clipboard,
        }
    }

    /// Update the canvas's viewport origin after layout changes
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.canvas_origin = origin;
    }

    /// Update the current scroll offset
    pub fn set_scroll_offset(&mut self, offset: Point) {
        self.scroll_offset = offset;
    }

    /// Whether a long-press timer should be running
    pub fn has_pending_long_press(&self) -> bool {
        self.pending_long_press.is_some()
    }

    /// Convert a viewport position to page space
    pub fn to_page(&self, viewport: Point) -> Point {
        viewport - self.canvas_origin + self.scroll_offset
    }

    /// Route one input event into the editor state
    pub fn dispatch(&mut self, state: &mut EditorState, event: InputEvent) -> Dispatch {
        trace!("dispatch: {event:?}");
        match event {
            InputEvent::PointerDown {
                target,
                position,
                button,
                shift,
            } => {
                if button != PointerButton::Primary {
                    return Dispatch::Handled;
                }
                let at = self.to_page(position);
                self.pointer = at;
                self.press(state, target, at, shift)
            }
            InputEvent::PointerMove { position } => {
                let at = self.to_page(position);
                self.pointer = at;
                self.movement(state, at);
                Dispatch::Handled
            }
            InputEvent::PointerUp { position } => {
                let at = self.to_page(position);
                self.pointer = at;
                self.release(state)
            }
            InputEvent::TouchStart { target, position } => {
                let at = self.to_page(position);
                self.pointer = at;
                // In edit mode a touch press drags only after the hold
                // elapses; until then it is a candidate tap.
                if state.is_editing() {
                    if let PointerTarget::Element(id) = &target {
                        self.pending_long_press = Some(PendingPress {
                            id: id.clone(),
                            position: at,
                        });
                        self.pressed = Some(id.clone());
                        return Dispatch::Handled;
                    }
                }
                self.press(state, target, at, false)
            }
            InputEvent::TouchMove { position } => {
                let at = self.to_page(position);
                if let Some(pending) = &self.pending_long_press {
                    let moved = (at.x - pending.position.x).hypot(at.y - pending.position.y);
                    if moved > TOUCH_SLOP_PX {
                        trace!("touch slop exceeded, long press cancelled");
                        self.pending_long_press = None;
                        self.pressed = None;
                    }
                }
                self.pointer = at;
                self.movement(state, at);
                Dispatch::Handled
            }
            InputEvent::TouchEnd { position } => {
                let at = self.to_page(position);
                self.pointer = at;
                self.pending_long_press = None;
                self.release(state)
            }
            InputEvent::LongPressElapsed => {
                if let Some(pending) = self.pending_long_press.take() {
                    self.pressed = None;
                    state.drag_start(pending.id, pending.position, false);
                }
                Dispatch::Handled
            }
            InputEvent::KeyDown { key, ctrl, shift } => {
                self.key_down(state, key, ctrl, shift);
                Dispatch::Handled
            }
            InputEvent::ContextMenu { position, element } => {
                if state.is_editing() {
                    let at = self.to_page(position);
                    state.open_context_menu(at);
                    if let Some(id) = element {
                        if !state.selection.is_selected(&id) {
                            state.selection.select_only(id);
                        }
                    }
                }
                Dispatch::Handled
            }
        }
    }

    fn press(
        &mut self,
        state: &mut EditorState,
        target: PointerTarget,
        at: Point,
        shift: bool,
    ) -> Dispatch {
        self.pressed = None;
        match target {
            PointerTarget::Canvas => {
                if state.is_editing() {
                    state.marquee_start(at, shift);
                } else {
                    state.selection.clear();
                }
            }
            PointerTarget::Element(id) => {
                if state.is_editing() {
                    state.drag_start(id, at, shift);
                } else {
                    self.pressed = Some(id);
                }
            }
            PointerTarget::ResizeHandle(id) => {
                if state.is_editing() {
                    state.resize_start(id, at);
                }
            }
        }
        Dispatch::Handled
    }

    fn movement(&mut self, state: &mut EditorState, at: Point) {
        match &state.gesture {
            Gesture::Dragging(_) => state.drag_move(at),
            Gesture::Resizing(_) => state.resize_move(at),
            Gesture::Marquee(_) => state.marquee_move(at),
            Gesture::Idle => {}
        }
    }

    fn release(&mut self, state: &mut EditorState) -> Dispatch {
        match &state.gesture {
            Gesture::Dragging(_) => {
                state.drag_end();
                return Dispatch::Handled;
            }
            Gesture::Resizing(_) => {
                state.resize_end();
                return Dispatch::Handled;
            }
            Gesture::Marquee(_) => {
                state.marquee_end();
                return Dispatch::Handled;
            }
            Gesture::Idle => {}
        }
        match self.pressed.take() {
            Some(id) if !state.is_editing() => Dispatch::ClickElement(id),
            _ => Dispatch::Handled,
        }
    }

    fn key_down(&mut self, state: &mut EditorState, key: Key, ctrl: bool, shift: bool) {
        if key == Key::Escape {
            state.end_gesture();
            state.close_edit_modal();
            state.close_context_menu();
            return;
        }
        // Shortcuts apply only in edit mode and never while the property
        // modal owns the keyboard.
        if !state.is_editing() || state.editing_element.is_some() {
            return;
        }
        match (key, ctrl) {
            (Key::C, true) => state.copy_selected(self.clipboard.as_mut()),
            (Key::V, true) => {
                // A paste invoked from the context menu lands at the menu
                // point; a plain keyboard paste follows the pointer.
                let at = state.context_menu_point.unwrap_or(self.pointer);
                state.paste(self.clipboard.as_mut(), Some(at));
            }
            (Key::A, true) => state.select_all(),
            (Key::Z, true) => {
                if shift {
                    state.redo();
                } else {
                    state.undo();
                }
            }
            (Key::ArrowLeft, false) => state.nudge_selection(-1.0, 0.0),
            (Key::ArrowRight, false) => state.nudge_selection(1.0, 0.0),
            (Key::ArrowUp, false) => state.nudge_selection(0.0, -1.0),
            (Key::ArrowDown, false) => state.nudge_selection(0.0, 1.0),
            (Key::Delete, false) | (Key::Backspace, false) => state.delete_selected(),
            _ => {}
        }
    }
}
