//! Shared constants for the viewport, history, and status line.

/// Sentinel scale meaning "fit the image inside the panel".
pub const FIT_SCALE: f64 = -1.0;

/// Largest accepted zoom factor.
pub const MAX_SCALE: f64 = 16.0;

/// Margin (in screen pixels) subtracted from the panel before computing a fit scale.
pub const DEFAULT_FIT_INSET: f64 = 20.0;

/// Factor applied per mouse wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.2;

/// Number of undo (and redo) points retained by default.
pub const DEFAULT_UNDO_CAPACITY: usize = 10;

/// Maximum length of an undo comment before it gets shortened for menus.
pub const COMMENT_MAX_LENGTH: usize = 40;

/// Panel size reported while no image is loaded.
pub const EMPTY_PANEL_WIDTH: u32 = 320;
pub const EMPTY_PANEL_HEIGHT: u32 = 200;
