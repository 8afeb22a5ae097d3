//! Element lifecycle: creation, property editing, deletion, clipboard.

use tracing::debug;

use pageforge_core::constants::PASTE_OFFSET_PX;
use pageforge_core::geometry::Point;
use pageforge_core::notify::Notification;

use crate::clipboard::{self, ClipboardProvider};
use crate::commands::EditorCommand;
use crate::editor_state::EditorState;
use crate::model::{ElementId, ElementKind, ElementType, PageElement};
use crate::serialization::ElementData;

impl EditorState {
    /// Create a new element of the given variety. It lands at the last
    /// context-menu point when one is recorded, gets the page's default
    /// urls, stacks on top, and becomes the sole selection.
    pub fn add_element(&mut self, element_type: ElementType) -> Option<ElementId> {
        if !self.is_editing() {
            return None;
        }
        let at = self.context_menu_point.unwrap_or(Point::new(100.0, 100.0));
        let mut element = PageElement::new(element_type, at.x, at.y);
        element.z_index = self.store.max_z_index() + 1;
        if let Some(default_url) = &self.settings.default_rest_url {
            *element.kind.url_mut() = Some(default_url.clone());
        }
        if let ElementKind::Image { src, .. } = &mut element.kind {
            if let Some(default_src) = &self.settings.default_image_url {
                *src = default_src.clone();
            }
        }
        let id = element.id.clone();
        self.push_command(EditorCommand::AddElements {
            elements: vec![element],
        });
        self.selection.select_only(id.clone());
        self.close_context_menu();
        Some(id)
    }

    /// Delete every selected element
    pub fn delete_selected(&mut self) {
        if !self.is_editing() || self.selection.is_empty() {
            return;
        }
        let elements: Vec<PageElement> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.store.get(id).cloned())
            .collect();
        if elements.is_empty() {
            return;
        }
        for el in &elements {
            self.measurements.forget(&el.id);
        }
        self.selection.clear();
        self.push_command(EditorCommand::RemoveElements { elements });
    }

    /// Commit edited properties for an element. The whole old state is
    /// retained so undo restores it exactly.
    pub fn update_element(&mut self, new_state: PageElement) {
        if !self.is_editing() {
            return;
        }
        let Some(old_state) = self.store.get(&new_state.id).cloned() else {
            return;
        };
        if old_state == new_state {
            return;
        }
        self.push_command(EditorCommand::ReplaceElement {
            old_state,
            new_state,
        });
    }

    /// Open the property modal for an element
    pub fn open_edit_modal(&mut self, id: ElementId) {
        if self.is_editing() && self.store.contains(&id) {
            self.editing_element = Some(id);
        }
    }

    pub fn close_edit_modal(&mut self) {
        self.editing_element = None;
    }

    /// Select every element on the page
    pub fn select_all(&mut self) {
        if !self.is_editing() {
            return;
        }
        let ids: Vec<ElementId> = self.store.iter().map(|e| e.id.clone()).collect();
        self.selection.set(ids);
    }

    /// Copy the selected elements to the clipboard as a JSON payload. A
    /// local snapshot is always retained first, so paste still works when
    /// the platform clipboard refuses the write.
    pub fn copy_selected(&mut self, clipboard: &mut dyn ClipboardProvider) {
        if !self.is_editing() || self.selection.is_empty() {
            return;
        }
        let elements: Vec<PageElement> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.store.get(id).cloned())
            .collect();
        if elements.is_empty() {
            return;
        }
        self.local_clipboard = elements.clone();
        let records: Vec<ElementData> = elements.iter().map(ElementData::from_element).collect();
        let payload = match serde_json::to_string(&records) {
            Ok(p) => p,
            Err(e) => {
                self.notifications.publish(Notification::CopyFailed {
                    reason: e.to_string(),
                });
                return;
            }
        };
        match clipboard.write_text(&payload) {
            Ok(()) => self.notifications.publish(Notification::Copied {
                count: elements.len(),
            }),
            Err(e) => {
                debug!("clipboard write failed, keeping local snapshot: {e}");
                self.notifications.publish(Notification::CopyFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Paste elements from the clipboard. The system clipboard is tried
    /// first; when it is denied or unreachable, the local snapshot from
    /// the last copy stands in. An unreadable payload aborts the paste.
    pub fn paste(&mut self, clipboard: &mut dyn ClipboardProvider, at: Option<Point>) {
        if !self.is_editing() {
            return;
        }
        let elements = match clipboard.read_text() {
            Ok(text) => match clipboard::validate_payload(&text) {
                Ok(_) => match serde_json::from_str::<Vec<ElementData>>(&text) {
                    Ok(records) => records
                        .into_iter()
                        .enumerate()
                        .map(|(i, r)| r.into_element(i as i32 + 1))
                        .collect(),
                    Err(e) => {
                        self.notifications
                            .publish(Notification::ClipboardPayloadInvalid {
                                reason: e.to_string(),
                            });
                        return;
                    }
                },
                Err(e) => {
                    self.notifications
                        .publish(Notification::ClipboardPayloadInvalid {
                            reason: e.to_string(),
                        });
                    return;
                }
            },
            Err(e) => {
                if self.local_clipboard.is_empty() {
                    debug!("clipboard read failed with nothing to fall back to: {e}");
                    self.notifications
                        .publish(Notification::ClipboardPermissionDenied);
                    return;
                }
                debug!("clipboard read failed, pasting local snapshot: {e}");
                self.local_clipboard.clone()
            }
        };
        self.paste_elements(elements, at);
    }

    /// Place copies of the given elements on the page with fresh ids,
    /// stacked above everything, and select them. When a target point is
    /// given the group's bounding top-left lands there; otherwise the
    /// group shifts by a fixed offset from the originals.
    pub fn paste_elements(&mut self, elements: Vec<PageElement>, at: Option<Point>) {
        if !self.is_editing() || elements.is_empty() {
            return;
        }
        let min_x = elements.iter().map(|e| e.x).fold(f64::INFINITY, f64::min);
        let min_y = elements.iter().map(|e| e.y).fold(f64::INFINITY, f64::min);
        let (dx, dy) = match at {
            Some(p) => (p.x - min_x, p.y - min_y),
            None => (PASTE_OFFSET_PX, PASTE_OFFSET_PX),
        };
        let base_z = self.store.max_z_index();
        let mut pasted = Vec::with_capacity(elements.len());
        // Relative stacking within the group is preserved.
        let mut ordered = elements;
        ordered.sort_by_key(|e| e.z_index);
        for (i, mut el) in ordered.into_iter().enumerate() {
            el.id = ElementId::generate();
            el.x += dx;
            el.y += dy;
            el.z_index = base_z + i as i32 + 1;
            pasted.push(el);
        }
        let count = pasted.len();
        let new_ids: Vec<ElementId> = pasted.iter().map(|e| e.id.clone()).collect();
        self.push_command(EditorCommand::AddElements { elements: pasted });
        self.selection.set(new_ids);
        // The menu point is spent; later pastes follow the pointer again.
        self.close_context_menu();
        self.notifications.publish(Notification::Pasted { count });
    }
}
