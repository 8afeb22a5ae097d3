//! # PageForge Editor
//!
//! The direct-manipulation editing core of PageForge. This crate owns the
//! page element model and everything a user does to it: selection,
//! dragging, resizing, marquee selection, alignment, z-reordering,
//! clipboard copy/paste, undo/redo, the edit-mode authentication gate, and
//! configuration document import/export.
//!
//! Rendering is deliberately out of scope. A host embeds [`EditorState`]
//! (usually behind the [`SharedEditor`] alias), feeds input through the
//! [`InteractionDispatcher`], and draws whatever the state says.

pub mod actions;
pub mod auth;
pub mod clipboard;
pub mod commands;
pub mod dispatcher;
pub mod editor_state;
pub mod element_store;
pub mod measure;
pub mod model;
pub mod selection;
pub mod serialization;

pub use actions::{run_click_action, SharedEditor};
pub use auth::{EditGate, GateState};
pub use clipboard::{ClipboardProvider, MemoryClipboard, SystemClipboard};
pub use commands::EditorCommand;
pub use dispatcher::{
    Dispatch, InputEvent, InteractionDispatcher, Key, PointerButton, PointerTarget,
};
pub use editor_state::{
    Alignment, ClickAction, EditorState, Gesture, ReorderDirection,
};
pub use element_store::ElementStore;
pub use measure::{ElementRect, MeasurementCache};
pub use model::{ElementId, ElementKind, ElementStatus, ElementType, PageElement, PageSettings};
pub use selection::SelectionManager;
pub use serialization::{ElementData, PageDocument};
