use std::fmt::{self, Display, Formatter};

use crate::geom::Rect;

/// Alias for the window server's window number (`kCGWindowNumber`).
pub type WindowId = u32;

/// Snapshot of one on-screen window as reported by the window service.
///
/// Values are built fresh on every enumeration and never mutated; a new
/// enumeration is required to observe moves or closes.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    /// Window server identifier, unique per live window.
    pub id: WindowId,
    /// Process identifier of the owning application.
    pub owner_pid: i32,
    /// Frame in global top-left screen coordinates.
    pub frame: Rect,
    /// Owning application name, when the window server exposes it.
    pub app_name: Option<String>,
    /// Window title, when the window server exposes it.
    pub title: Option<String>,
    /// Stacking layer; 0 is a normal application window.
    pub layer: i32,
}

impl WindowInfo {
    /// Construct a normal-layer window without app name or title.
    pub fn new(id: WindowId, owner_pid: i32, frame: Rect) -> Self {
        Self {
            id,
            owner_pid,
            frame,
            app_name: None,
            title: None,
            layer: 0,
        }
    }

    /// Builder-style helper to set the owning application name.
    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app_name = Some(app.into());
        self
    }

    /// Builder-style helper to set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style helper to set the stacking layer.
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// True for normal top-level application windows (layer 0).
    pub fn is_top_level(&self) -> bool {
        self.layer == 0
    }

    /// Application name or `"Unknown"`.
    pub fn app_label(&self) -> &str {
        self.app_name.as_deref().unwrap_or("Unknown")
    }

    /// Window title or `"No title"`.
    pub fn title_label(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "No title",
        }
    }
}

impl Display for WindowInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Window ID: {}", self.id)?;
        if let Some(app) = &self.app_name {
            write!(f, ", App: {app}")?;
        }
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            write!(f, ", Title: \"{title}\"")?;
        }
        let origin = self.frame.origin();
        let size = self.frame.size();
        write!(
            f,
            ", Position: ({}, {}), Size: {}x{}, PID: {}",
            origin.x as i64, origin.y as i64, size.width as i64, size.height as i64, self.owner_pid
        )
    }
}

/// Enumeration filter passed to [`crate::WindowService::enumerate_windows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowListOptions {
    /// Only include windows currently on screen.
    pub on_screen_only: bool,
    /// Exclude desktop elements such as the wallpaper and desktop icons.
    pub exclude_desktop_elements: bool,
}

impl WindowListOptions {
    /// On-screen windows, desktop elements excluded.
    pub const VISIBLE: Self = Self {
        on_screen_only: true,
        exclude_desktop_elements: true,
    };
}

impl Default for WindowListOptions {
    fn default() -> Self {
        Self::VISIBLE
    }
}
