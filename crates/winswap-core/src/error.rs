use std::result;

use thiserror::Error;

use crate::window::{WindowId, WindowInfo};

/// Errors returned by detection-gated and swap operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// Accessibility permission is required but not granted.
    #[error("Accessibility permission missing")]
    PermissionDenied,

    /// The two-display swap needs exactly two displays with a front window.
    #[error("Expected exactly 2 screens with windows, but found {0}")]
    IncorrectWindowCount(usize),

    /// The window id is absent from the current enumeration.
    #[error("Window with ID {0} not found")]
    WindowNotFound(WindowId),

    /// The owning process exposes no accessibility handle for the window.
    #[error("Could not get accessibility element for window: {0}")]
    HandleNotFound(WindowInfo),

    /// The host refused to report the window's position.
    #[error("Could not read position for window: {0}")]
    PositionReadFailed(WindowInfo),

    /// The host refused to move the window.
    #[error(
        "Could not set position for window: {0}. The app may not allow window repositioning."
    )]
    PositionSetFailed(WindowInfo),
}

/// Result alias for swap operations.
pub type Result<T> = result::Result<T, SwapError>;
