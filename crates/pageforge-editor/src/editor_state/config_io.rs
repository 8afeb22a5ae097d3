//! Loading and saving configuration documents.
//!
//! Load failures are never fatal: the editor keeps its current (usually
//! empty) contents and tells the user. When an explicitly requested
//! alternate document is missing, a sibling `error.json` document stands
//! in before giving up.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use pageforge_core::notify::Notification;

use crate::editor_state::EditorState;
use crate::serialization::PageDocument;

impl EditorState {
    /// Replace the editor contents with a loaded document
    pub fn apply_document(&mut self, document: PageDocument) {
        self.settings = document.settings.clone();
        let mut elements = document.into_elements();
        elements.sort_by_key(|e| e.z_index);
        self.store.replace_all(elements);
        self.selection.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.editing_element = None;
    }

    /// Load a configuration document from disk.
    ///
    /// `explicit` marks a document the user asked for by name; only then
    /// does the sibling `error.json` fallback apply when the named file
    /// cannot be loaded. Failure leaves the current contents untouched
    /// and publishes a notification.
    pub fn load_config(&mut self, path: &Path, explicit: bool) -> Result<()> {
        match PageDocument::load_from_file(path) {
            Ok(doc) => {
                self.apply_document(doc);
                Ok(())
            }
            Err(primary) => {
                if explicit {
                    let fallback = path.with_file_name("error.json");
                    warn!(
                        "requested configuration {} failed, trying {}",
                        path.display(),
                        fallback.display()
                    );
                    if let Ok(doc) = PageDocument::load_from_file(&fallback) {
                        self.apply_document(doc);
                        return Ok(());
                    }
                }
                self.notifications.publish(Notification::ConfigLoadFailed {
                    resource: path.display().to_string(),
                    reason: format!("{primary:#}"),
                });
                Err(primary)
            }
        }
    }

    /// Export the current page to a configuration document on disk
    pub fn save_config(&self, path: &Path) -> Result<()> {
        let doc = PageDocument::from_parts(&self.settings, self.store.iter());
        doc.save_to_file(path)
    }
}
