use objc2_foundation::MainThreadMarker;
use tracing::debug;
use winswap_core::{Display, Point, WindowInfo, WindowListOptions, WindowService};

use crate::{
    ax::{self, AxHandle},
    error::{Error, Result},
    screen, window,
};

/// Window service backed by CoreGraphics, AppKit and the Accessibility API.
///
/// Must be created and used on the main thread: display enumeration goes
/// through `NSScreen`.
#[derive(Debug)]
pub struct SystemWindowService {
    /// Proof that we are on the main thread.
    mtm: MainThreadMarker,
}

impl SystemWindowService {
    /// Create the service; fails off the main thread.
    pub fn new() -> Result<Self> {
        let mtm = MainThreadMarker::new().ok_or(Error::MainThread)?;
        Ok(Self { mtm })
    }
}

impl WindowService for SystemWindowService {
    type Handle = AxHandle;

    fn has_privileged_access(&self) -> bool {
        permissions::accessibility_ok()
    }

    fn request_privileged_access(&self) {
        let trusted = permissions::request_accessibility();
        debug!(trusted, "requested accessibility access");
    }

    fn enumerate_windows(&self, options: WindowListOptions) -> Vec<WindowInfo> {
        window::list_windows(options)
    }

    fn enumerate_displays(&self) -> Vec<Display> {
        screen::list_displays(self.mtm)
    }

    fn resolve_handle(&self, window: &WindowInfo) -> Option<AxHandle> {
        ax::window_element(window.owner_pid, window.id)
            .map_err(|e| debug!(window = window.id, pid = window.owner_pid, error = %e, "resolve_handle"))
            .ok()
    }

    fn read_position(&self, handle: &AxHandle) -> Option<Point> {
        ax::position(handle)
            .map_err(|e| debug!(error = %e, "read_position"))
            .ok()
    }

    fn write_position(&self, handle: &AxHandle, to: Point) -> bool {
        match ax::set_position(handle, to) {
            Ok(()) => true,
            Err(e) => {
                debug!(?to, error = %e, "write_position");
                false
            }
        }
    }
}
