//! winswap-core: find the front window on each display and swap two of them.
//!
//! The algorithms run against an injected [`WindowService`], which wraps the
//! host's window server and accessibility layer. The macOS implementation
//! lives in `mac-winops`; tests use [`fake::FakeWindowService`] (enabled with
//! the `test-utils` feature).
//!
//! Everything here is synchronous and single-threaded. Every enumeration is a
//! fresh snapshot, so no state crosses operation boundaries.

mod detector;
mod display;
mod error;
pub mod gate;
mod geom;
mod service;
mod swapper;
mod window;

#[cfg(any(test, feature = "test-utils"))]
pub mod fake;

#[cfg(test)]
mod property_tests;

pub use detector::{TopWindows, WindowDetector, associate};
pub use display::{Display, DisplayId};
pub use error::{Result, SwapError};
pub use geom::{Point, Rect, Size};
pub use service::WindowService;
pub use swapper::{SwapOutcome, SwapPhase, WindowSwapper};
pub use window::{WindowId, WindowInfo, WindowListOptions};
