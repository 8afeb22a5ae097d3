//! Click classification and element request status.
//!
//! In view mode, clicking a url-bearing element either navigates (text
//! elements) or fires a GET request whose outcome the element displays
//! through its status. Status is per element; a loading element ignores
//! further clicks while the rest of the page stays interactive.

use tracing::debug;

use pageforge_core::notify::Notification;

use crate::editor_state::EditorState;
use crate::model::{ElementId, ElementStatus, ElementType};

/// What a click on an element should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Nothing: edit mode, no url, or a request already in flight.
    None,
    /// The host should navigate to the url.
    Navigate(String),
    /// The editor should issue a GET request to the url.
    Fetch(String),
}

impl EditorState {
    /// Decide what a view-mode click on an element does
    pub fn classify_click(&self, id: &ElementId) -> ClickAction {
        if self.is_editing() {
            return ClickAction::None;
        }
        let Some(el) = self.store.get(id) else {
            return ClickAction::None;
        };
        let Some(url) = el.click_url() else {
            return ClickAction::None;
        };
        if el.status == ElementStatus::Loading {
            debug!("click ignored: element {id} already loading");
            return ClickAction::None;
        }
        if el.element_type() == ElementType::Text {
            ClickAction::Navigate(url.to_string())
        } else {
            ClickAction::Fetch(url.to_string())
        }
    }

    /// Mark an element's request as started
    pub fn begin_action(&mut self, id: &ElementId) {
        if let Some(el) = self.store.get_mut(id) {
            el.status = ElementStatus::Loading;
        }
    }

    /// Record the outcome of an element's request. Failures also surface
    /// a notification.
    pub fn finish_action(&mut self, id: &ElementId, result: Result<(), String>) {
        let Some(el) = self.store.get_mut(id) else {
            return;
        };
        match result {
            Ok(()) => el.status = ElementStatus::Success,
            Err(reason) => {
                el.status = ElementStatus::Error;
                self.notifications.publish(Notification::RequestFailed {
                    element_id: id.to_string(),
                    reason,
                });
            }
        }
    }

    /// Return an element to idle after its outcome has been shown. Only
    /// terminal states revert; an in-flight request is left alone.
    pub fn revert_status(&mut self, id: &ElementId) {
        if let Some(el) = self.store.get_mut(id) {
            if matches!(el.status, ElementStatus::Success | ElementStatus::Error) {
                el.status = ElementStatus::Idle;
            }
        }
    }
}
