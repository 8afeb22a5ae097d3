//! Host-reported element measurements.
//!
//! Most elements have no stored size; the host measures their rendered
//! boxes and reports them here. Geometry-dependent operations (alignment,
//! marquee hit-testing) consult the cache and skip elements it cannot
//! resolve.

use std::collections::HashMap;

use pageforge_core::geometry::Rect;

use crate::model::{ElementId, PageElement};

/// An element id paired with its resolved page-space rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRect {
    pub id: ElementId,
    pub rect: Rect,
}

/// Latest known rendered size of each element.
#[derive(Debug, Clone, Default)]
pub struct MeasurementCache {
    sizes: HashMap<ElementId, (f64, f64)>,
}

impl MeasurementCache {
    pub fn new() -> Self {
        MeasurementCache::default()
    }

    /// Record the rendered size of an element
    pub fn record(&mut self, id: ElementId, width: f64, height: f64) {
        self.sizes.insert(id, (width, height));
    }

    /// Forget a removed element's measurement
    pub fn forget(&mut self, id: &ElementId) {
        self.sizes.remove(id);
    }

    /// The known size of an element, preferring its explicit size when it
    /// stores one.
    pub fn size_of(&self, element: &PageElement) -> Option<(f64, f64)> {
        element
            .explicit_size()
            .or_else(|| self.sizes.get(&element.id).copied())
    }

    /// The element's page-space rectangle, when its size is resolvable
    pub fn rect_of(&self, element: &PageElement) -> Option<Rect> {
        let (w, h) = self.size_of(element)?;
        Some(Rect::new(element.x, element.y, w, h))
    }
}
