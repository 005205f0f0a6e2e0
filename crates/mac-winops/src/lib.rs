//! mac-winops: the macOS implementation of [`winswap_core::WindowService`].
//!
//! - Windows come from `CGWindowListCopyWindowInfo`, front to back.
//! - Displays come from `NSScreen`, converted into the CoreGraphics global
//!   coordinate space (top-left origin) so they can be compared with window
//!   bounds directly.
//! - Window handles are AX elements matched on `AXWindowNumber`; positions are
//!   read and written through `AXPosition`.
//!
//! All position operations require Accessibility permission. On other
//! platforms [`SystemWindowService::new`] fails with
//! [`Error::UnsupportedPlatform`].

pub mod coords;
mod error;

#[cfg(target_os = "macos")]
mod ax;
#[cfg(target_os = "macos")]
mod cfutil;
#[cfg(target_os = "macos")]
mod screen;
#[cfg(target_os = "macos")]
mod system;
#[cfg(target_os = "macos")]
mod window;

#[cfg(not(target_os = "macos"))]
mod unsupported;

#[cfg(target_os = "macos")]
pub use ax::AxHandle;
pub use error::{Error, Result};
#[cfg(target_os = "macos")]
pub use system::SystemWindowService;
#[cfg(not(target_os = "macos"))]
pub use unsupported::{AxHandle, SystemWindowService};
