use winswap_core::{Display, Point, WindowInfo, WindowListOptions, WindowService};

use crate::error::{Error, Result};

/// Placeholder handle; never issued.
#[derive(Debug)]
pub struct AxHandle(());

/// Window service stub for platforms without macOS window APIs.
///
/// [`SystemWindowService::new`] always fails, so the trait methods below are
/// unreachable in practice.
#[derive(Debug)]
pub struct SystemWindowService(());

impl SystemWindowService {
    /// Always fails with [`Error::UnsupportedPlatform`].
    pub fn new() -> Result<Self> {
        Err(Error::UnsupportedPlatform)
    }
}

impl WindowService for SystemWindowService {
    type Handle = AxHandle;

    fn has_privileged_access(&self) -> bool {
        false
    }

    fn request_privileged_access(&self) {}

    fn enumerate_windows(&self, _options: WindowListOptions) -> Vec<WindowInfo> {
        Vec::new()
    }

    fn enumerate_displays(&self) -> Vec<Display> {
        Vec::new()
    }

    fn resolve_handle(&self, _window: &WindowInfo) -> Option<AxHandle> {
        None
    }

    fn read_position(&self, _handle: &AxHandle) -> Option<Point> {
        None
    }

    fn write_position(&self, _handle: &AxHandle, _to: Point) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_reports_unsupported_platform() {
        assert_eq!(
            SystemWindowService::new().unwrap_err(),
            Error::UnsupportedPlatform
        );
    }
}
