//! Clipboard access and paste payload validation.
//!
//! Elements are exchanged through the clipboard as the same JSON array
//! format the configuration document uses, so payloads copied from one
//! page paste into another. The trait seam keeps the system clipboard out
//! of tests.

use arboard::Clipboard;

use pageforge_core::error::ClipboardError;

/// Text clipboard seam.
pub trait ClipboardProvider: Send {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The real system clipboard.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = Clipboard::new().map_err(map_arboard)?;
        Ok(SystemClipboard { inner })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(map_arboard)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text.to_string()).map_err(map_arboard)
    }
}

fn map_arboard(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ClipboardOccupied => ClipboardError::PermissionDenied,
        other => ClipboardError::Unavailable {
            reason: other.to_string(),
        },
    }
}

/// In-memory clipboard for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    deny: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        MemoryClipboard::default()
    }

    /// A clipboard that refuses all access, for exercising denial paths
    pub fn denied() -> Self {
        MemoryClipboard {
            contents: None,
            deny: true,
        }
    }

    pub fn set_contents(&mut self, text: impl Into<String>) {
        self.contents = Some(text.into());
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        if self.deny {
            return Err(ClipboardError::PermissionDenied);
        }
        self.contents.clone().ok_or(ClipboardError::Unavailable {
            reason: "clipboard is empty".to_string(),
        })
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::PermissionDenied);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Check that clipboard text is a plausible element payload: a non-empty
/// JSON array whose entries each carry an id, a type, and numeric x/y.
pub fn validate_payload(text: &str) -> Result<serde_json::Value, ClipboardError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ClipboardError::InvalidPayload {
            reason: format!("not valid JSON: {e}"),
        })?;
    let items = value.as_array().ok_or_else(|| ClipboardError::InvalidPayload {
        reason: "expected a JSON array of elements".to_string(),
    })?;
    if items.is_empty() {
        return Err(ClipboardError::InvalidPayload {
            reason: "payload contains no elements".to_string(),
        });
    }
    for (i, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or_else(|| ClipboardError::InvalidPayload {
            reason: format!("entry {i} is not an object"),
        })?;
        if !obj.get("id").map(|v| v.is_string()).unwrap_or(false) {
            return Err(ClipboardError::InvalidPayload {
                reason: format!("entry {i} is missing an id"),
            });
        }
        if !obj.get("type").map(|v| v.is_string()).unwrap_or(false) {
            return Err(ClipboardError::InvalidPayload {
                reason: format!("entry {i} is missing a type"),
            });
        }
        for coord in ["x", "y"] {
            if !obj.get(coord).map(|v| v.is_number()).unwrap_or(false) {
                return Err(ClipboardError::InvalidPayload {
                    reason: format!("entry {i} is missing numeric {coord}"),
                });
            }
        }
    }
    Ok(value)
}
