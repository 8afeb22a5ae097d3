//! The aggregate editor state.
//!
//! [`EditorState`] owns everything the host renders from: the element
//! store, page settings, selection, the authentication gate, whatever
//! gesture is in flight, measurement cache, undo history, and the
//! notification dispatcher. Submodules group the operations:
//!
//! - [`elements`]: element creation, editing, deletion, clipboard
//! - [`gestures`]: drag, resize, and marquee state machines
//! - [`arrange`]: alignment and z-reordering
//! - [`history`]: the undo/redo stacks
//! - [`status`]: click classification and request status
//! - [`config_io`]: document load/save

mod arrange;
mod config_io;
mod elements;
mod gestures;
mod history;
mod status;

pub use arrange::{Alignment, ReorderDirection};
pub use gestures::{DragState, MarqueeState, ResizeState};
pub use status::ClickAction;

use pageforge_core::geometry::{Point, Rect};
use pageforge_core::notify::NotificationDispatcher;

use crate::auth::EditGate;
use crate::commands::EditorCommand;
use crate::element_store::ElementStore;
use crate::measure::MeasurementCache;
use crate::model::{ElementId, PageElement, PageSettings};
use crate::selection::SelectionManager;

/// The direct-manipulation gesture currently in flight, if any.
///
/// Gestures are mutually exclusive; starting one ends any other.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragState),
    Resizing(ResizeState),
    Marquee(MarqueeState),
}

/// Everything the editor knows about the open page.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub store: ElementStore,
    pub settings: PageSettings,
    pub selection: SelectionManager,
    pub gate: EditGate,
    pub gesture: Gesture,
    pub measurements: MeasurementCache,
    /// Element whose property modal is open, if any. Keyboard shortcuts
    /// are suspended while editing.
    pub editing_element: Option<ElementId>,
    /// Page-space point of the last context-menu open; new elements and
    /// pastes land here.
    pub context_menu_point: Option<Point>,
    pub notifications: NotificationDispatcher,
    pub(crate) local_clipboard: Vec<PageElement>,
    pub(crate) undo_stack: Vec<EditorCommand>,
    pub(crate) redo_stack: Vec<EditorCommand>,
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        EditorState {
            store: ElementStore::new(),
            settings: PageSettings::default(),
            selection: SelectionManager::new(),
            gate: EditGate::new(),
            gesture: Gesture::Idle,
            measurements: MeasurementCache::new(),
            editing_element: None,
            context_menu_point: None,
            notifications: NotificationDispatcher::default(),
            local_clipboard: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Title the host should display for this page
    pub fn page_title(&self) -> &str {
        self.settings.page_title.as_deref().unwrap_or("Untitled Page")
    }

    /// Whether the user is currently in edit mode
    pub fn is_editing(&self) -> bool {
        self.gate.is_editing()
    }

    /// The page-space rectangle of an element, when its size is known
    pub fn element_rect(&self, id: &ElementId) -> Option<Rect> {
        let element = self.store.get(id)?;
        self.measurements.rect_of(element)
    }

    /// Request entry into edit mode; may open the password prompt
    pub fn request_edit_mode(&mut self) {
        self.gate.request_edit();
    }

    /// Leave edit mode. Selection, any in-flight gesture, and the open
    /// property modal are discarded; authentication persists.
    pub fn leave_edit_mode(&mut self) {
        self.gate.leave_edit();
        self.selection.clear();
        self.gesture = Gesture::Idle;
        self.editing_element = None;
        self.context_menu_point = None;
    }

    /// Check a submitted edit-mode password. Failure publishes a
    /// notification and leaves the prompt open.
    pub fn submit_password(&mut self, submitted: &str) -> bool {
        let configured = self.settings.editor_password.clone();
        match self.gate.submit_password(submitted, configured.as_deref()) {
            Ok(()) => true,
            Err(_) => {
                self.notifications
                    .publish(pageforge_core::notify::Notification::AuthenticationFailed);
                false
            }
        }
    }

    /// Apply a password supplied through the page url, as hosts do on
    /// mount. The session authenticates into view mode; it enters edit
    /// mode only when the url also carries the edit flag. A wrong
    /// password publishes a notification and leaves the gate locked.
    pub fn authenticate_from_url(&mut self, password: &str, enter_edit: bool) -> bool {
        let configured = self.settings.editor_password.clone();
        match self
            .gate
            .submit_url_password(password, configured.as_deref(), enter_edit)
        {
            Ok(()) => true,
            Err(_) => {
                self.notifications
                    .publish(pageforge_core::notify::Notification::AuthenticationFailed);
                false
            }
        }
    }

    /// Record where the context menu opened, in page space
    pub fn open_context_menu(&mut self, at: Point) {
        self.context_menu_point = Some(at);
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu_point = None;
    }

    /// Drop selected ids that no longer refer to live elements
    pub(crate) fn prune_selection(&mut self) {
        let store = &self.store;
        self.selection.retain(|id| store.contains(id));
    }
}
