//! User-facing notification dispatch.
//!
//! The editor core never renders toasts itself; it publishes notifications
//! on a broadcast channel and hosts subscribe to display them however they
//! like. Publishing with no subscribers is fine and the notification is
//! dropped.

use std::fmt;

use tokio::sync::broadcast;
use tracing::debug;

/// Notifications surfaced to the user while editing.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A submitted edit-mode password was wrong
    AuthenticationFailed,
    /// The platform refused clipboard access
    ClipboardPermissionDenied,
    /// Clipboard text was not a valid element payload
    ClipboardPayloadInvalid { reason: String },
    /// Writing to the clipboard failed
    CopyFailed { reason: String },
    /// Elements were copied to the clipboard
    Copied { count: usize },
    /// Elements were pasted onto the page
    Pasted { count: usize },
    /// A click-triggered request failed
    RequestFailed { element_id: String, reason: String },
    /// A configuration document could not be loaded
    ConfigLoadFailed { resource: String, reason: String },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::AuthenticationFailed => write!(f, "Incorrect password"),
            Notification::ClipboardPermissionDenied => {
                write!(f, "Clipboard access was denied")
            }
            Notification::ClipboardPayloadInvalid { reason } => {
                write!(f, "Cannot paste: {reason}")
            }
            Notification::CopyFailed { reason } => write!(f, "Copy failed: {reason}"),
            Notification::Copied { count } => {
                write!(f, "Copied {count} element{}", plural(*count))
            }
            Notification::Pasted { count } => {
                write!(f, "Pasted {count} element{}", plural(*count))
            }
            Notification::RequestFailed { element_id, reason } => {
                write!(f, "Request for element {element_id} failed: {reason}")
            }
            Notification::ConfigLoadFailed { resource, reason } => {
                write!(f, "Could not load '{resource}': {reason}")
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Broadcast dispatcher for user notifications.
///
/// Cloning the dispatcher shares the underlying channel; each subscriber
/// gets every notification published after it subscribed.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    tx: broadcast::Sender<Notification>,
}

impl NotificationDispatcher {
    /// Create a dispatcher with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        NotificationDispatcher { tx }
    }

    /// Subscribe to notifications published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Publish a notification to all current subscribers
    pub fn publish(&self, notification: Notification) {
        debug!("notification: {notification}");
        // Send only errors when there are no receivers; that is not a fault.
        let _ = self.tx.send(notification);
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NotificationDispatcher {
    fn default() -> Self {
        NotificationDispatcher::new(64)
    }
}
