//! Alignment and stacking-order operations.

use tracing::debug;

use crate::commands::{EditorCommand, ElementMove, ZEntry};
use crate::editor_state::EditorState;
use crate::model::ElementId;

/// Edge or center the selection aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

/// Direction of a z-order change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    /// Above every other element.
    Front,
    /// Below every other element.
    Back,
    /// One step up.
    Forward,
    /// One step down.
    Backward,
}

impl EditorState {
    /// Align the selected elements to the first-selected element. The
    /// anchor never moves; every other resolvable element shifts so the
    /// chosen edge or center lines up with the anchor's. A no-op unless
    /// at least two selected elements have known sizes.
    pub fn align(&mut self, alignment: Alignment) {
        if !self.is_editing() {
            return;
        }
        let rects: Vec<(ElementId, pageforge_core::geometry::Rect)> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.element_rect(id).map(|r| (id.clone(), r)))
            .collect();
        if rects.len() < 2 {
            debug!("align skipped: fewer than two measurable elements selected");
            return;
        }
        let (_, anchor) = &rects[0];
        let mut moves = Vec::new();
        for (id, rect) in rects.iter().skip(1) {
            let (new_x, new_y) = match alignment {
                Alignment::Left => (anchor.left(), rect.y),
                Alignment::Right => (anchor.right() - rect.width, rect.y),
                Alignment::CenterHorizontal => {
                    (anchor.center().x - rect.width / 2.0, rect.y)
                }
                Alignment::Top => (rect.x, anchor.top()),
                Alignment::Bottom => (rect.x, anchor.bottom() - rect.height),
                Alignment::CenterVertical => {
                    (rect.x, anchor.center().y - rect.height / 2.0)
                }
            };
            if (new_x, new_y) != (rect.x, rect.y) {
                moves.push(ElementMove {
                    id: id.clone(),
                    from: (rect.x, rect.y),
                    to: (new_x, new_y),
                });
            }
        }
        if moves.is_empty() {
            return;
        }
        self.push_command(EditorCommand::PlaceElements { moves });
    }

    /// Restack the selected element in the given direction, then renumber
    /// all z-indices to a dense run. Reordering applies to exactly one
    /// element; any other selection size is a no-op.
    pub fn reorder(&mut self, direction: ReorderDirection) {
        if !self.is_editing() || self.selection.len() != 1 {
            debug!("reorder skipped: needs exactly one selected element");
            return;
        }
        let id = self.selection.ids()[0].clone();
        if !self.store.contains(&id) {
            return;
        }
        let old_z: Vec<(ElementId, i32)> = self
            .store
            .iter()
            .map(|e| (e.id.clone(), e.z_index))
            .collect();

        match direction {
            ReorderDirection::Front => {
                // Past the top; renumbering compacts the run.
                let top = self.store.len() as i32 + 1;
                if let Some(el) = self.store.get_mut(&id) {
                    el.z_index = top;
                }
            }
            ReorderDirection::Back => {
                if let Some(el) = self.store.get_mut(&id) {
                    el.z_index = 0;
                }
            }
            ReorderDirection::Forward => self.step_element(&id, true),
            ReorderDirection::Backward => self.step_element(&id, false),
        }
        self.store.renumber_z();

        let entries: Vec<ZEntry> = old_z
            .into_iter()
            .filter_map(|(id, old)| {
                let new = self.store.get(&id)?.z_index;
                (new != old).then_some(ZEntry {
                    id,
                    old_z: old,
                    new_z: new,
                })
            })
            .collect();
        if entries.is_empty() {
            return;
        }
        self.record_applied(EditorCommand::SetZOrder { entries });
    }

    /// Swap the element with its stacking neighbor, if it has one in that
    /// direction.
    fn step_element(&mut self, id: &ElementId, up: bool) {
        let mut order = self.store.z_order();
        let Some(pos) = order.iter().position(|i| i == id) else {
            return;
        };
        if up {
            if pos + 1 < order.len() {
                order.swap(pos, pos + 1);
            }
        } else if pos > 0 {
            order.swap(pos, pos - 1);
        }
        for (i, id) in order.iter().enumerate() {
            if let Some(el) = self.store.get_mut(id) {
                el.z_index = i as i32 + 1;
            }
        }
    }
}
