use crate::{
    display::Display,
    geom::Point,
    window::{WindowInfo, WindowListOptions},
};

/// Capability interface over the host's window server and accessibility layer.
///
/// Every non-deterministic, privilege-gated, platform-specific call the
/// detector and swapper make goes through this trait, so the algorithms can
/// run against a fake in tests. Implementations are expected to block; no
/// method carries a timeout.
pub trait WindowService {
    /// Opaque reference to a live window, required for position access.
    type Handle;

    /// Whether the process holds the privileged (Accessibility) capability.
    fn has_privileged_access(&self) -> bool;

    /// Ask the host to grant the privileged capability. May show a prompt;
    /// success is not reported.
    fn request_privileged_access(&self);

    /// Enumerate windows in front-to-back order.
    fn enumerate_windows(&self, options: WindowListOptions) -> Vec<WindowInfo>;

    /// Enumerate connected displays in the host's display order.
    fn enumerate_displays(&self) -> Vec<Display>;

    /// Resolve a window snapshot to a live handle. `None` when the owning
    /// process exposes no matching window (sandboxing, stale id).
    fn resolve_handle(&self, window: &WindowInfo) -> Option<Self::Handle>;

    /// Read a window's current origin.
    fn read_position(&self, handle: &Self::Handle) -> Option<Point>;

    /// Move a window's origin. Returns `false` when the host refuses.
    fn write_position(&self, handle: &Self::Handle, to: Point) -> bool;
}
