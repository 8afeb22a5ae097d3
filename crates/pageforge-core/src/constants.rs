//! Shared constants for the editor crates.

/// Hold duration before a touch press becomes a drag, in milliseconds.
pub const LONG_PRESS_DURATION_MS: u64 = 300;

/// Touch movement beyond this distance cancels a pending long press.
pub const TOUCH_SLOP_PX: f64 = 5.0;

/// Distance moved per arrow-key nudge.
pub const NUDGE_AMOUNT_PX: f64 = 1.0;

/// Minimum width/height an image may be resized to.
pub const MIN_IMAGE_DIMENSION_PX: f64 = 20.0;

/// Offset applied to pasted elements when no pointer position is available.
pub const PASTE_OFFSET_PX: f64 = 10.0;

/// Delay before a terminal element status reverts to idle, in milliseconds.
pub const STATUS_REVERT_DELAY_MS: u64 = 2000;

/// Password accepted when the loaded document configures none.
pub const DEFAULT_EDITOR_PASSWORD: &str = "admin";

/// Default box for newly placed image elements.
pub const DEFAULT_IMAGE_WIDTH: f64 = 200.0;
pub const DEFAULT_IMAGE_HEIGHT: f64 = 300.0;
