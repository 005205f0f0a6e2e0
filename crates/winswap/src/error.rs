//! Error handling for the winswap binary.

use std::{io, result};

use thiserror::Error;
use winswap_core::SwapError;

/// Convenient result type for winswap commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Detection or swap failure.
    #[error(transparent)]
    Swap(#[from] SwapError),
    /// The platform window service could not be created.
    #[error("Window service unavailable: {0}")]
    Platform(#[from] mac_winops::Error),
    /// No displays were reported.
    #[error("No screens detected")]
    NoDisplays,
    /// Swapping needs two displays.
    #[error("This tool requires at least 2 screens; currently detected: {found}")]
    NotEnoughDisplays {
        /// Number of displays found.
        found: usize,
    },
}
