//! Click-triggered requests.
//!
//! A view-mode click on a url-bearing element (other than a text element,
//! which navigates) issues a GET request. The element shows the outcome
//! through its status, then reverts to idle after a short delay. The
//! editor lock is never held across an await.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use pageforge_core::constants::STATUS_REVERT_DELAY_MS;
use pageforge_core::ThreadSafe;

use crate::editor_state::{ClickAction, EditorState};
use crate::model::ElementId;

/// The editor state as hosts share it between UI and async tasks.
pub type SharedEditor = ThreadSafe<EditorState>;

/// Carry out a view-mode click on an element.
///
/// Returns the navigation url when the click should navigate instead;
/// the host performs the navigation itself.
pub async fn run_click_action(
    editor: SharedEditor,
    id: ElementId,
    client: &reqwest::Client,
) -> Option<String> {
    let action = {
        let state = editor.lock();
        state.classify_click(&id)
    };
    let url = match action {
        ClickAction::None => return None,
        ClickAction::Navigate(url) => return Some(url),
        ClickAction::Fetch(url) => url,
    };

    editor.lock().begin_action(&id);
    debug!("element {id} requesting {url}");

    let outcome = match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(format!("status {}", status.as_u16()))
            }
        }
        Err(e) => Err(e.to_string()),
    };
    if let Err(reason) = &outcome {
        warn!("element {id} request failed: {reason}");
    }
    editor.lock().finish_action(&id, outcome);

    let revert_editor = editor.clone();
    let revert_id = id.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(STATUS_REVERT_DELAY_MS)).await;
        revert_editor.lock().revert_status(&revert_id);
    });
    None
}
