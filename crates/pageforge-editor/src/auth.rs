//! The edit-mode authentication gate.
//!
//! The page is view-only until the user unlocks edit mode with the
//! document's password. Authentication persists for the session: leaving
//! edit mode returns to view mode, not to the locked state, so re-entering
//! needs no second prompt.

use pageforge_core::constants::DEFAULT_EDITOR_PASSWORD;
use pageforge_core::error::AuthError;

/// Where the user stands with respect to edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Never authenticated this session.
    #[default]
    Locked,
    /// The password prompt is showing.
    Prompting,
    /// Authenticated but currently viewing.
    ViewMode,
    /// Authenticated and editing.
    EditMode,
}

/// Session authentication state machine.
#[derive(Debug, Clone, Default)]
pub struct EditGate {
    state: GateState,
}

impl EditGate {
    pub fn new() -> Self {
        EditGate::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether edit-mode operations are currently allowed
    pub fn is_editing(&self) -> bool {
        self.state == GateState::EditMode
    }

    /// Whether the session has ever authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GateState::ViewMode | GateState::EditMode)
    }

    /// Request edit mode. Enters directly when already authenticated,
    /// otherwise opens the password prompt.
    pub fn request_edit(&mut self) {
        self.state = match self.state {
            GateState::Locked | GateState::Prompting => GateState::Prompting,
            GateState::ViewMode | GateState::EditMode => GateState::EditMode,
        };
    }

    /// Leave edit mode, keeping the session authenticated
    pub fn leave_edit(&mut self) {
        if self.state == GateState::EditMode {
            self.state = GateState::ViewMode;
        }
    }

    /// Dismiss the password prompt without authenticating
    pub fn cancel_prompt(&mut self) {
        if self.state == GateState::Prompting {
            self.state = GateState::Locked;
        }
    }

    /// Check a submitted password against the configured one. On success
    /// the session enters edit mode; on failure the prompt stays open.
    pub fn submit_password(
        &mut self,
        submitted: &str,
        configured: Option<&str>,
    ) -> Result<(), AuthError> {
        let expected = configured.unwrap_or(DEFAULT_EDITOR_PASSWORD);
        if submitted == expected {
            self.state = GateState::EditMode;
            Ok(())
        } else {
            Err(AuthError::IncorrectPassword)
        }
    }

    /// Check a password supplied through the page url. Success
    /// authenticates the session but enters edit mode only when the edit
    /// flag accompanies the password; otherwise the session lands in view
    /// mode. Failure leaves the gate where it was.
    pub fn submit_url_password(
        &mut self,
        submitted: &str,
        configured: Option<&str>,
        enter_edit: bool,
    ) -> Result<(), AuthError> {
        let expected = configured.unwrap_or(DEFAULT_EDITOR_PASSWORD);
        if submitted == expected {
            self.state = if enter_edit {
                GateState::EditMode
            } else {
                GateState::ViewMode
            };
            Ok(())
        } else {
            Err(AuthError::IncorrectPassword)
        }
    }
}
