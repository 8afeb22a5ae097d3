//! Flat storage of page elements.
//!
//! Insertion order is preserved; stacking is governed entirely by each
//! element's `z_index`. After any reorder the store renumbers indices to a
//! dense 1..=N run so exported documents stay compact.

use crate::model::{ElementId, PageElement};

/// Owns every element on the page.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<PageElement>,
}

impl ElementStore {
    pub fn new() -> Self {
        ElementStore::default()
    }

    /// Replace the entire contents of the store
    pub fn replace_all(&mut self, elements: Vec<PageElement>) {
        self.elements = elements;
    }

    /// Add an element to the page
    pub fn insert(&mut self, element: PageElement) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if present
    pub fn remove(&mut self, id: &ElementId) -> Option<PageElement> {
        let idx = self.elements.iter().position(|e| &e.id == id)?;
        Some(self.elements.remove(idx))
    }

    pub fn get(&self, id: &ElementId) -> Option<&PageElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut PageElement> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.iter().any(|e| &e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PageElement> {
        self.elements.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The highest z-index currently on the page, or 0 when empty
    pub fn max_z_index(&self) -> i32 {
        self.elements.iter().map(|e| e.z_index).max().unwrap_or(0)
    }

    /// Element ids sorted by z-index, bottom first. The sort is stable so
    /// equal indices keep their insertion order.
    pub fn z_order(&self) -> Vec<ElementId> {
        let mut ordered: Vec<&PageElement> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.z_index);
        ordered.into_iter().map(|e| e.id.clone()).collect()
    }

    /// Renumber z-indices to a dense 1..=N run preserving current stacking
    pub fn renumber_z(&mut self) {
        let order = self.z_order();
        for (i, id) in order.iter().enumerate() {
            if let Some(el) = self.get_mut(id) {
                el.z_index = i as i32 + 1;
            }
        }
    }
}
