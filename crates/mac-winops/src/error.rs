use std::result;

use thiserror::Error;

/// Errors raised inside the macOS window service.
///
/// These stay inside the adapter: the [`winswap_core::WindowService`]
/// contract reports failures as `None`/`false`, so the service logs the
/// error and discards it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failed to create an Accessibility API application element.
    #[error("Failed to create AX application element for pid {0}")]
    AppElement(i32),

    /// An Accessibility API operation failed with the given error code.
    #[error("AX operation failed: code {0}")]
    AxCode(i32),

    /// The AX element became invalid (e.g., window closed) during the operation.
    #[error("AX element invalid (window gone)")]
    WindowGone,

    /// None of the owner's AX windows carries the requested window number.
    #[error("No AX window with number {0}")]
    WindowNumber(u32),

    /// The attribute value was missing or had an unexpected type.
    #[error("Unsupported attribute")]
    Unsupported,

    /// AppKit display enumeration must run on the main thread.
    #[error("Operation requires main thread")]
    MainThread,

    /// The host platform has no window service.
    #[error("Window operations are only supported on macOS")]
    UnsupportedPlatform,
}

/// Result alias for window service internals.
pub type Result<T> = result::Result<T, Error>;
