//! Undoable editing commands.
//!
//! Every mutation of the element collection is expressed as an
//! [`EditorCommand`] that knows how to apply itself and how to undo
//! itself. The history module stacks these; commands themselves are pure
//! data plus the two transitions.

use tracing::warn;

use crate::element_store::ElementStore;
use crate::model::{ElementId, PageElement};

/// One element's movement between two positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMove {
    pub id: ElementId,
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// One element's change of stacking index.
#[derive(Debug, Clone, PartialEq)]
pub struct ZEntry {
    pub id: ElementId,
    pub old_z: i32,
    pub new_z: i32,
}

/// An undoable edit to the page.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Add elements to the page (element creation, paste).
    AddElements { elements: Vec<PageElement> },

    /// Remove elements from the page, remembering them for undo.
    RemoveElements { elements: Vec<PageElement> },

    /// Translate elements by a shared delta (drag, nudge).
    MoveElements {
        ids: Vec<ElementId>,
        dx: f64,
        dy: f64,
    },

    /// Place elements at recorded absolute positions (alignment).
    PlaceElements { moves: Vec<ElementMove> },

    /// Change an image element's stored box.
    ResizeElement {
        id: ElementId,
        old: (f64, f64),
        new: (f64, f64),
    },

    /// Replace an element's full state (property editing).
    ReplaceElement {
        old_state: PageElement,
        new_state: PageElement,
    },

    /// Restack elements to new z-indices.
    SetZOrder { entries: Vec<ZEntry> },
}

impl EditorCommand {
    /// Apply the command to the store
    pub fn apply(&self, store: &mut ElementStore) {
        match self {
            EditorCommand::AddElements { elements } => {
                for el in elements {
                    store.insert(el.clone());
                }
            }
            EditorCommand::RemoveElements { elements } => {
                for el in elements {
                    store.remove(&el.id);
                }
            }
            EditorCommand::MoveElements { ids, dx, dy } => {
                for id in ids {
                    if let Some(el) = store.get_mut(id) {
                        el.x += dx;
                        el.y += dy;
                    }
                }
            }
            EditorCommand::PlaceElements { moves } => {
                for m in moves {
                    if let Some(el) = store.get_mut(&m.id) {
                        el.x = m.to.0;
                        el.y = m.to.1;
                    }
                }
            }
            EditorCommand::ResizeElement { id, new, .. } => {
                set_image_box(store, id, *new);
            }
            EditorCommand::ReplaceElement { new_state, .. } => {
                if let Some(el) = store.get_mut(&new_state.id) {
                    *el = new_state.clone();
                }
            }
            EditorCommand::SetZOrder { entries } => {
                for e in entries {
                    if let Some(el) = store.get_mut(&e.id) {
                        el.z_index = e.new_z;
                    }
                }
            }
        }
    }

    /// Reverse the command on the store
    pub fn undo(&self, store: &mut ElementStore) {
        match self {
            EditorCommand::AddElements { elements } => {
                for el in elements {
                    store.remove(&el.id);
                }
            }
            EditorCommand::RemoveElements { elements } => {
                for el in elements {
                    store.insert(el.clone());
                }
            }
            EditorCommand::MoveElements { ids, dx, dy } => {
                for id in ids {
                    if let Some(el) = store.get_mut(id) {
                        el.x -= dx;
                        el.y -= dy;
                    }
                }
            }
            EditorCommand::PlaceElements { moves } => {
                for m in moves {
                    if let Some(el) = store.get_mut(&m.id) {
                        el.x = m.from.0;
                        el.y = m.from.1;
                    }
                }
            }
            EditorCommand::ResizeElement { id, old, .. } => {
                set_image_box(store, id, *old);
            }
            EditorCommand::ReplaceElement { old_state, .. } => {
                if let Some(el) = store.get_mut(&old_state.id) {
                    *el = old_state.clone();
                }
            }
            EditorCommand::SetZOrder { entries } => {
                for e in entries {
                    if let Some(el) = store.get_mut(&e.id) {
                        el.z_index = e.old_z;
                    }
                }
            }
        }
    }

    /// Short description for logging
    pub fn describe(&self) -> &'static str {
        match self {
            EditorCommand::AddElements { .. } => "add elements",
            EditorCommand::RemoveElements { .. } => "remove elements",
            EditorCommand::MoveElements { .. } => "move elements",
            EditorCommand::PlaceElements { .. } => "place elements",
            EditorCommand::ResizeElement { .. } => "resize element",
            EditorCommand::ReplaceElement { .. } => "edit element",
            EditorCommand::SetZOrder { .. } => "restack elements",
        }
    }
}

fn set_image_box(store: &mut ElementStore, id: &ElementId, size: (f64, f64)) {
    use crate::model::ElementKind;
    match store.get_mut(id) {
        Some(el) => {
            if let ElementKind::Image { width, height, .. } = &mut el.kind {
                *width = size.0;
                *height = size.1;
            } else {
                warn!("resize command targeted non-image element {id}");
            }
        }
        None => warn!("resize command targeted missing element {id}"),
    }
}
