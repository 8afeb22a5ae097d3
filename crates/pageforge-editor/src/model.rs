//! The page element model.
//!
//! A page is a flat collection of absolutely positioned elements. Every
//! element shares position, stacking order, and styling; the per-variety
//! payload lives in [`ElementKind`] so a button cannot carry image fields
//! and vice versa.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pageforge_core::constants::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};

/// Stable identity of a page element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a fresh unique id
    pub fn generate() -> Self {
        ElementId(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        ElementId(s)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        ElementId(s.to_string())
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transient request status of an element.
///
/// Only `Idle` survives serialization; documents always load with every
/// element idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// The four varieties of page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Button,
    Text,
    Icon,
    Image,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Text => "text",
            ElementType::Icon => "icon",
            ElementType::Image => "image",
        }
    }
}

impl std::str::FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(ElementType::Button),
            "text" => Ok(ElementType::Text),
            "icon" => Ok(ElementType::Icon),
            "image" => Ok(ElementType::Image),
            other => Err(format!("unknown element type '{other}'")),
        }
    }
}

/// Variety-specific payload of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Button {
        label: String,
        url: Option<String>,
    },
    Text {
        content: String,
        url: Option<String>,
    },
    Icon {
        icon: String,
        url: Option<String>,
    },
    Image {
        src: String,
        width: f64,
        height: f64,
        /// width / height captured when the image loaded; resizing is
        /// disabled until it is known.
        aspect_ratio: Option<f64>,
        /// Seconds between automatic refreshes of the image source.
        refresh_interval: Option<u64>,
        url: Option<String>,
    },
}

impl ElementKind {
    /// The variety tag of this payload
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Button { .. } => ElementType::Button,
            ElementKind::Text { .. } => ElementType::Text,
            ElementKind::Icon { .. } => ElementType::Icon,
            ElementKind::Image { .. } => ElementType::Image,
        }
    }

    /// The url this element requests or navigates to when clicked, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            ElementKind::Button { url, .. }
            | ElementKind::Text { url, .. }
            | ElementKind::Icon { url, .. }
            | ElementKind::Image { url, .. } => url.as_deref(),
        }
    }

    /// Mutable access to the click url
    pub fn url_mut(&mut self) -> &mut Option<String> {
        match self {
            ElementKind::Button { url, .. }
            | ElementKind::Text { url, .. }
            | ElementKind::Icon { url, .. }
            | ElementKind::Image { url, .. } => url,
        }
    }
}

/// A single absolutely positioned element on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Top-left corner in page space.
    pub x: f64,
    pub y: f64,
    /// Stacking order; higher values render on top.
    pub z_index: i32,
    pub color: String,
    pub font_size: f64,
    pub font_family: String,
    pub status: ElementStatus,
}

impl PageElement {
    /// Create an element of the given variety at a position, with the
    /// defaults a freshly placed element gets.
    pub fn new(element_type: ElementType, x: f64, y: f64) -> Self {
        let kind = match element_type {
            ElementType::Button => ElementKind::Button {
                label: "Button".to_string(),
                url: None,
            },
            ElementType::Text => ElementKind::Text {
                content: "New Text".to_string(),
                url: None,
            },
            ElementType::Icon => ElementKind::Icon {
                icon: "Smile".to_string(),
                url: None,
            },
            ElementType::Image => ElementKind::Image {
                src: String::new(),
                width: DEFAULT_IMAGE_WIDTH,
                height: DEFAULT_IMAGE_HEIGHT,
                aspect_ratio: None,
                refresh_interval: None,
                url: None,
            },
        };
        PageElement {
            id: ElementId::generate(),
            kind,
            x,
            y,
            z_index: 0,
            color: "#87CEEB".to_string(),
            font_size: 16.0,
            font_family: "'PT Sans', sans-serif".to_string(),
            status: ElementStatus::Idle,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// The explicit size of the element, if it has one. Only images carry
    /// a stored size; other varieties are measured by the host.
    pub fn explicit_size(&self) -> Option<(f64, f64)> {
        match &self.kind {
            ElementKind::Image { width, height, .. } => Some((*width, *height)),
            _ => None,
        }
    }

    /// The url this element acts on when clicked, if any
    pub fn click_url(&self) -> Option<&str> {
        self.kind.url()
    }
}

/// Page-level settings carried by the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    /// Title shown by the host; empty means untitled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    /// Password that unlocks edit mode. Falls back to a built-in default
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_password: Option<String>,
    /// Url pre-filled for new url-bearing elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rest_url: Option<String>,
    /// Source pre-filled for new image elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}
