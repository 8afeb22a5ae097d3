//! The undo/redo stacks.
//!
//! Full-session history: every committed command is kept until the page
//! is closed. New commands clear the redo stack.

use tracing::debug;

use crate::commands::EditorCommand;
use crate::editor_state::EditorState;

impl EditorState {
    /// Apply a command and push it onto the undo stack
    pub fn push_command(&mut self, command: EditorCommand) {
        debug!("apply: {}", command.describe());
        command.apply(&mut self.store);
        self.undo_stack.push(command);
        self.redo_stack.clear();
        self.prune_selection();
    }

    /// Record a command whose effect is already in the store, as gesture
    /// handlers do after mutating live during the gesture.
    pub(crate) fn record_applied(&mut self, command: EditorCommand) {
        debug!("record: {}", command.describe());
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the most recent command, if any
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(command) => {
                debug!("undo: {}", command.describe());
                command.undo(&mut self.store);
                self.redo_stack.push(command);
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone command, if any
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                debug!("redo: {}", command.describe());
                command.apply(&mut self.store);
                self.undo_stack.push(command);
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of commands available to undo
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}
