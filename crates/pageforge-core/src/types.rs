//! Shared type aliases.

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared mutable state wrapper used across the editor crates.
pub type ThreadSafe<T> = Arc<Mutex<T>>;
