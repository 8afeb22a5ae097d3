//! Configuration document import and export.
//!
//! The on-disk format is a single JSON object: page settings at the top
//! level plus an `elements` array. Field names are camelCase to match the
//! documents the hosted editor produces. Transient state (request status,
//! selection, history) never serializes; imported elements always start
//! idle, and elements missing a z-index are assigned their array position
//! plus one.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{
    ElementId, ElementKind, ElementStatus, ElementType, PageElement, PageSettings,
};

/// A page element as it appears in the configuration document.
///
/// All variety-specific fields are optional here; [`into_element`] sorts
/// out which apply.
///
/// [`into_element`]: ElementData::into_element
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ElementData {
    /// Build the in-memory element this record describes. `fallback_z` is
    /// used when the record carries no z-index.
    pub fn into_element(self, fallback_z: i32) -> PageElement {
        let kind = match self.element_type {
            ElementType::Button => ElementKind::Button {
                label: self.label.unwrap_or_else(|| "Button".to_string()),
                url: self.url,
            },
            ElementType::Text => ElementKind::Text {
                content: self.content.unwrap_or_else(|| "New Text".to_string()),
                url: self.url,
            },
            ElementType::Icon => ElementKind::Icon {
                icon: self.icon.unwrap_or_else(|| "Smile".to_string()),
                url: self.url,
            },
            ElementType::Image => ElementKind::Image {
                src: self.src.unwrap_or_default(),
                width: self.width.unwrap_or(200.0),
                height: self.height.unwrap_or(300.0),
                aspect_ratio: self.aspect_ratio,
                refresh_interval: self.refresh_interval,
                url: self.url,
            },
        };
        PageElement {
            id: ElementId::from(self.id),
            kind,
            x: self.x,
            y: self.y,
            z_index: self.z_index.unwrap_or(fallback_z),
            color: self.color.unwrap_or_else(|| "#87CEEB".to_string()),
            font_size: self.font_size.unwrap_or(16.0),
            font_family: self
                .font_family
                .unwrap_or_else(|| "'PT Sans', sans-serif".to_string()),
            status: ElementStatus::Idle,
        }
    }

    /// The serializable record for an in-memory element
    pub fn from_element(element: &PageElement) -> Self {
        let mut data = ElementData {
            id: element.id.as_str().to_string(),
            element_type: element.element_type(),
            x: element.x,
            y: element.y,
            z_index: Some(element.z_index),
            color: Some(element.color.clone()),
            font_size: Some(element.font_size),
            font_family: Some(element.font_family.clone()),
            label: None,
            content: None,
            icon: None,
            src: None,
            width: None,
            height: None,
            aspect_ratio: None,
            refresh_interval: None,
            url: None,
        };
        match &element.kind {
            ElementKind::Button { label, url } => {
                data.label = Some(label.clone());
                data.url = url.clone();
            }
            ElementKind::Text { content, url } => {
                data.content = Some(content.clone());
                data.url = url.clone();
            }
            ElementKind::Icon { icon, url } => {
                data.icon = Some(icon.clone());
                data.url = url.clone();
            }
            ElementKind::Image {
                src,
                width,
                height,
                aspect_ratio,
                refresh_interval,
                url,
            } => {
                data.src = Some(src.clone());
                data.width = Some(*width);
                data.height = Some(*height);
                data.aspect_ratio = *aspect_ratio;
                data.refresh_interval = *refresh_interval;
                data.url = url.clone();
            }
        }
        data
    }
}

/// The complete configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(flatten)]
    pub settings: PageSettings,
    #[serde(default)]
    pub elements: Vec<ElementData>,
}

impl PageDocument {
    /// Build a document from live editor contents
    pub fn from_parts<'a>(
        settings: &PageSettings,
        elements: impl Iterator<Item = &'a PageElement>,
    ) -> Self {
        PageDocument {
            settings: settings.clone(),
            elements: elements.map(ElementData::from_element).collect(),
        }
    }

    /// Materialize the document's elements, normalizing missing z-indices
    /// to each element's position in the array plus one.
    pub fn into_elements(self) -> Vec<PageElement> {
        self.elements
            .into_iter()
            .enumerate()
            .map(|(i, data)| data.into_element(i as i32 + 1))
            .collect()
    }

    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse configuration document")
    }

    /// Serialize the document to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration document")
    }

    /// Load a document from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        let doc = Self::from_json(&text)?;
        info!(
            "loaded configuration {} with {} elements",
            path.display(),
            doc.elements.len()
        );
        Ok(doc)
    }

    /// Save the document to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write configuration: {}", path.display()))?;
        info!("saved configuration to {}", path.display());
        Ok(())
    }
}
