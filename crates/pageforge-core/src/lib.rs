//! # PageForge Core
//!
//! Core types and utilities for the PageForge page editor.
//! Provides the error taxonomy, geometry primitives, shared constants,
//! and the notification dispatcher used by the editing crates.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod notify;
pub mod types;

pub use error::{ActionError, AuthError, ClipboardError, ConfigError, Error, Result};
pub use geometry::{Point, Rect};
pub use notify::{Notification, NotificationDispatcher};
pub use types::ThreadSafe;
