//! Ordered selection tracking.
//!
//! Selection order matters: the first-selected element anchors alignment
//! operations, so the set is kept as an ordered list rather than a hash
//! set.

use crate::model::ElementId;

/// Tracks which elements are selected, in selection order.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    ids: Vec<ElementId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        SelectionManager::default()
    }

    /// Whether the element is currently selected
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.ids.contains(id)
    }

    /// The first-selected element, used as the anchor for alignment
    pub fn anchor(&self) -> Option<&ElementId> {
        self.ids.first()
    }

    /// Replace the selection with a single element
    pub fn select_only(&mut self, id: ElementId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Replace the selection with the given elements, keeping their order
    pub fn set(&mut self, ids: Vec<ElementId>) {
        self.ids = ids;
        self.dedup();
    }

    /// Toggle membership: remove if selected, append if not
    pub fn toggle(&mut self, id: ElementId) {
        if let Some(pos) = self.ids.iter().position(|i| i == &id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Add elements to the selection, skipping ones already present
    pub fn extend(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop selected ids that no longer satisfy the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&ElementId) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn dedup(&mut self) {
        let mut seen = Vec::with_capacity(self.ids.len());
        self.ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });
    }
}
