//! Drag, resize, and marquee gesture handling.
//!
//! Gestures mutate elements live so the host renders motion as it
//! happens; only the completed gesture enters the undo history, as a
//! single command covering the whole movement.

use tracing::debug;

use pageforge_core::constants::{MIN_IMAGE_DIMENSION_PX, NUDGE_AMOUNT_PX};
use pageforge_core::geometry::{Point, Rect};

use crate::commands::EditorCommand;
use crate::editor_state::{EditorState, Gesture};
use crate::model::{ElementId, ElementKind};

/// A drag of the selected elements in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Position of every dragged element when the drag began.
    pub initial_positions: Vec<(ElementId, (f64, f64))>,
    /// Pointer position that started the drag, in page space.
    pub start: Point,
    pub last_delta: (f64, f64),
}

/// An image resize in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeState {
    pub id: ElementId,
    pub start: Point,
    pub initial_width: f64,
    pub initial_height: f64,
    pub aspect_ratio: f64,
}

/// A marquee selection in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    /// The corner where the marquee began.
    pub anchor: Point,
    pub rect: Rect,
    /// Whether hits add to the existing selection instead of replacing it.
    pub additive: bool,
}

impl EditorState {
    /// Begin dragging an element. A shift press toggles the element's
    /// membership first; a plain press on an unselected element makes it
    /// the sole selection, while a press on an already-selected element
    /// keeps the multi-selection so the whole group drags.
    pub fn drag_start(&mut self, id: ElementId, at: Point, shift: bool) {
        if !self.is_editing() || !self.store.contains(&id) {
            return;
        }
        if shift {
            self.selection.toggle(id.clone());
        } else if !self.selection.is_selected(&id) {
            self.selection.select_only(id.clone());
        }
        if !self.selection.is_selected(&id) {
            // Shift-toggled off; nothing to drag.
            self.gesture = Gesture::Idle;
            return;
        }
        let initial_positions: Vec<(ElementId, (f64, f64))> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.store.get(id).map(|e| (id.clone(), (e.x, e.y))))
            .collect();
        self.gesture = Gesture::Dragging(DragState {
            initial_positions,
            start: at,
            last_delta: (0.0, 0.0),
        });
    }

    /// Update an in-flight drag with the current pointer position
    pub fn drag_move(&mut self, at: Point) {
        let Gesture::Dragging(drag) = &mut self.gesture else {
            return;
        };
        let dx = at.x - drag.start.x;
        let dy = at.y - drag.start.y;
        drag.last_delta = (dx, dy);
        let positions = drag.initial_positions.clone();
        for (id, (ix, iy)) in positions {
            if let Some(el) = self.store.get_mut(&id) {
                el.x = ix + dx;
                el.y = iy + dy;
            }
        }
    }

    /// Finish a drag, committing the accumulated movement to history
    pub fn drag_end(&mut self) {
        let Gesture::Dragging(drag) = std::mem::take(&mut self.gesture) else {
            return;
        };
        let (dx, dy) = drag.last_delta;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let ids: Vec<ElementId> = drag
            .initial_positions
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        // Elements already sit at their final positions.
        self.record_applied(EditorCommand::MoveElements { ids, dx, dy });
    }

    /// Begin resizing an image element from its handle. Ignored until the
    /// image has loaded and reported its aspect ratio.
    pub fn resize_start(&mut self, id: ElementId, at: Point) {
        if !self.is_editing() {
            return;
        }
        let Some(el) = self.store.get(&id) else {
            return;
        };
        let ElementKind::Image {
            width,
            height,
            aspect_ratio: Some(ratio),
            ..
        } = &el.kind
        else {
            debug!("resize ignored for {id}: no aspect ratio yet");
            return;
        };
        self.gesture = Gesture::Resizing(ResizeState {
            id,
            start: at,
            initial_width: *width,
            initial_height: *height,
            aspect_ratio: *ratio,
        });
    }

    /// Update an in-flight resize. Only horizontal pointer movement is
    /// honored; height follows the locked aspect ratio, and neither
    /// dimension may shrink below the minimum.
    pub fn resize_move(&mut self, at: Point) {
        let Gesture::Resizing(resize) = &self.gesture else {
            return;
        };
        let dx = at.x - resize.start.x;
        let mut new_width = (resize.initial_width + dx).max(MIN_IMAGE_DIMENSION_PX);
        let mut new_height = new_width / resize.aspect_ratio;
        if new_height < MIN_IMAGE_DIMENSION_PX {
            new_height = MIN_IMAGE_DIMENSION_PX;
            new_width = new_height * resize.aspect_ratio;
        }
        let id = resize.id.clone();
        if let Some(el) = self.store.get_mut(&id) {
            if let ElementKind::Image { width, height, .. } = &mut el.kind {
                *width = new_width;
                *height = new_height;
            }
        }
    }

    /// Finish a resize, committing the box change to history
    pub fn resize_end(&mut self) {
        let Gesture::Resizing(resize) = std::mem::take(&mut self.gesture) else {
            return;
        };
        let Some((w, h)) = self.store.get(&resize.id).and_then(|e| e.explicit_size()) else {
            return;
        };
        if (w, h) == (resize.initial_width, resize.initial_height) {
            return;
        }
        self.record_applied(EditorCommand::ResizeElement {
            id: resize.id,
            old: (resize.initial_width, resize.initial_height),
            new: (w, h),
        });
    }

    /// Begin a marquee selection on empty canvas. Unless additive, the
    /// existing selection clears immediately.
    pub fn marquee_start(&mut self, at: Point, additive: bool) {
        if !self.is_editing() {
            return;
        }
        if !additive {
            self.selection.clear();
        }
        self.gesture = Gesture::Marquee(MarqueeState {
            anchor: at,
            rect: Rect::from_corners(at, at),
            additive,
        });
    }

    /// Update an in-flight marquee with the current pointer position
    pub fn marquee_move(&mut self, at: Point) {
        if let Gesture::Marquee(marquee) = &mut self.gesture {
            marquee.rect = Rect::from_corners(marquee.anchor, at);
        }
    }

    /// Finish a marquee, selecting every element whose box overlaps it
    pub fn marquee_end(&mut self) {
        let Gesture::Marquee(marquee) = std::mem::take(&mut self.gesture) else {
            return;
        };
        let hits: Vec<ElementId> = self
            .store
            .iter()
            .filter(|el| {
                self.measurements
                    .rect_of(el)
                    .map(|r| r.intersects(&marquee.rect))
                    .unwrap_or(false)
            })
            .map(|el| el.id.clone())
            .collect();
        if marquee.additive {
            self.selection.extend(hits);
        } else {
            self.selection.set(hits);
        }
    }

    /// Abandon any in-flight gesture without committing it
    pub fn end_gesture(&mut self) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {}
            Gesture::Dragging(drag) => {
                // Snap everything back to where the drag began.
                for (id, (x, y)) in drag.initial_positions {
                    if let Some(el) = self.store.get_mut(&id) {
                        el.x = x;
                        el.y = y;
                    }
                }
            }
            Gesture::Resizing(resize) => {
                if let Some(el) = self.store.get_mut(&resize.id) {
                    if let ElementKind::Image { width, height, .. } = &mut el.kind {
                        *width = resize.initial_width;
                        *height = resize.initial_height;
                    }
                }
            }
            Gesture::Marquee(_) => {}
        }
    }

    /// Move the selection by one nudge step in the given direction
    pub fn nudge_selection(&mut self, dx: f64, dy: f64) {
        if !self.is_editing() || self.selection.is_empty() {
            return;
        }
        let ids = self.selection.ids().to_vec();
        self.push_command(EditorCommand::MoveElements {
            ids,
            dx: dx * NUDGE_AMOUNT_PX,
            dy: dy * NUDGE_AMOUNT_PX,
        });
    }
}
