//! Error handling for PageForge
//!
//! Provides error types for all layers of the editor:
//! - Configuration errors (document loading/parsing)
//! - Authentication errors (edit-mode gate)
//! - Clipboard errors (system clipboard and paste payloads)
//! - Action errors (click-triggered network requests)
//!
//! All error types use `thiserror` for ergonomic error handling. Every one
//! of these is recoverable: they are converted to user-facing notifications
//! at the boundary where they occur and never halt the editor.

use thiserror::Error;

/// Configuration document error type
///
/// Represents failures while loading or interpreting a page configuration
/// document. Load failures are non-fatal; the editor mounts with an empty
/// element collection.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// The named resource (and any fallback) could not be loaded
    #[error("Failed to load configuration '{resource}': {reason}")]
    LoadFailed {
        /// The resource that was requested.
        resource: String,
        /// Why the load failed.
        reason: String,
    },

    /// The document parsed but does not describe a valid page
    #[error("Invalid configuration document: {reason}")]
    InvalidDocument {
        /// Why the document was rejected.
        reason: String,
    },
}

/// Authentication error type
///
/// Wrong passwords are recovered locally by re-prompting; there is no
/// lockout or backoff.
#[derive(Error, Debug, Clone)]
pub enum AuthError {
    /// Submitted password does not match the configured password
    #[error("Incorrect password")]
    IncorrectPassword,

    /// An edit-mode operation was attempted without authentication
    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Clipboard error type
///
/// Permission denial is deliberately distinct from payload problems so the
/// two surface as different user-facing notifications.
#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    /// The platform refused clipboard access
    #[error("Clipboard permission denied")]
    PermissionDenied,

    /// The clipboard could not be reached at all
    #[error("Clipboard unavailable: {reason}")]
    Unavailable {
        /// Why the clipboard was unavailable.
        reason: String,
    },

    /// Clipboard text is not a valid element payload
    #[error("Invalid paste payload: {reason}")]
    InvalidPayload {
        /// Why the payload was rejected.
        reason: String,
    },
}

/// Click-action error type
///
/// Failures of the GET request a url-bearing element issues when clicked.
/// Purely observational; the element's status reflects the outcome.
#[derive(Error, Debug, Clone)]
pub enum ActionError {
    /// The element has no url to request
    #[error("Element has no url")]
    MissingUrl,

    /// The server answered with a non-success status
    #[error("Request failed with status {status}")]
    RequestFailed {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The request never completed
    #[error("Request transport error: {reason}")]
    Transport {
        /// Why the request failed to complete.
        reason: String,
    },
}

/// Main error type for PageForge
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Authentication error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Clipboard error
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Click-action error
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an authentication error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this is a clipboard permission denial
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Error::Clipboard(ClipboardError::PermissionDenied))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
