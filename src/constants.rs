//! Application-wide constants.
//!
//! Centralizes grid limits, catalog defaults and UI copy so the session,
//! settings and views agree on them.

// ============================================================================
// Grid Limits
// ============================================================================

/// Largest grid edge length accepted from settings or the size picker
pub const MAX_GRID_SIZE: usize = 100;

/// Grid sizes offered by the size picker when settings don't override them
pub const DEFAULT_MAZE_SIZES: [usize; 8] = [5, 10, 15, 20, 25, 30, 40, 50];

/// Grid size selected at startup
pub const DEFAULT_MAZE_SIZE: usize = 20;

/// Algorithm selected at startup
pub const DEFAULT_ALGORITHM: &str = "Recursive Backtrack";

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "mazemask";

/// Settings file name inside [`APP_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Status Text
// ============================================================================

pub const STATUS_IDLE: &str = "Click the GO button to create a maze";

pub const STATUS_DISPLAYING: &str = "Click REFRESH to make a different maze";

pub const STATUS_MASKING: &str =
    "Select squares on the grid to create a mask.\nMasked squares will not be included in the maze";

pub const STATUS_PLAYING: &str = "";

// ============================================================================
// Labels
// ============================================================================

/// Mask button label once the current size has a saved mask
pub const LABEL_EDIT_MASK: &str = "Edit Mask";

/// Mask button label while the current size has no saved mask
pub const LABEL_CREATE_MASK: &str = "Create Mask";

// ============================================================================
// Profiling Thresholds
// ============================================================================

/// Generation slower than this (ms) is reported when profiling is enabled
pub const GENERATION_WARN_MS: f64 = 50.0;

/// A single dispatched event slower than this (ms) is reported when profiling is enabled
pub const DISPATCH_WARN_MS: f64 = 16.67;
