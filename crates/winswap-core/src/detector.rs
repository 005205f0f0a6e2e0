//! Window-to-display association.
//!
//! The detector assigns each on-screen window to the display it visually
//! occupies. Windows are visited front to back and displays in enumeration
//! order; a window goes to the first display it intersects that has no
//! window yet. The frontmost window per display therefore wins.
//!
//! A window straddling two displays lands on whichever of them is enumerated
//! first, regardless of overlap area.

use tracing::trace;

use crate::{
    display::{Display, DisplayId},
    service::WindowService,
    window::{WindowInfo, WindowListOptions},
};

/// Ordered display → front window association.
///
/// Entries keep the order in which they were assigned, which follows the
/// front-to-back window order. Each display appears at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopWindows {
    /// Assigned pairs in insertion order.
    entries: Vec<(Display, WindowInfo)>,
}

impl TopWindows {
    /// Number of displays that received a window.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no display received a window.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Front window for the display with `id`, if any.
    pub fn get(&self, id: DisplayId) -> Option<&WindowInfo> {
        self.entries
            .iter()
            .find(|(d, _)| d.id == id)
            .map(|(_, w)| w)
    }

    /// Whether `id` already has a window.
    pub fn contains(&self, id: DisplayId) -> bool {
        self.entries.iter().any(|(d, _)| d.id == id)
    }

    /// Iterate `(display, window)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Display, WindowInfo)> {
        self.entries.iter()
    }

    /// Windows only, in insertion order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowInfo> {
        self.entries.iter().map(|(_, w)| w)
    }

    /// Consume into the underlying pairs.
    pub fn into_entries(self) -> Vec<(Display, WindowInfo)> {
        self.entries
    }
}

/// Associate windows (front to back) with displays (enumeration order).
///
/// Pure function of its two inputs.
pub fn associate(windows: &[WindowInfo], displays: &[Display]) -> TopWindows {
    let mut out = TopWindows::default();
    if displays.is_empty() {
        return out;
    }
    for window in windows {
        let target = displays
            .iter()
            .find(|d| !out.contains(d.id) && d.frame.intersects(&window.frame));
        if let Some(screen) = target {
            trace!(window = window.id, display = screen.id, "assigned top window");
            out.entries.push((screen.clone(), window.clone()));
        }
        if out.len() == displays.len() {
            break;
        }
    }
    out
}

/// Detector bound to a window service for the duration of one logical operation.
pub struct WindowDetector<'a, S: ?Sized> {
    /// Source of window and display snapshots.
    service: &'a S,
}

impl<'a, S> WindowDetector<'a, S>
where
    S: WindowService + ?Sized,
{
    /// Wrap a window service.
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// On-screen, non-desktop windows at layer 0, front to back.
    pub fn list_top_level_windows(&self) -> Vec<WindowInfo> {
        let all = self.service.enumerate_windows(WindowListOptions::VISIBLE);
        let total = all.len();
        let windows: Vec<WindowInfo> = all.into_iter().filter(WindowInfo::is_top_level).collect();
        trace!(total, top_level = windows.len(), "enumerated windows");
        windows
    }

    /// Connected displays with their names.
    pub fn list_displays(&self) -> Vec<Display> {
        self.service.enumerate_displays()
    }

    /// Frontmost window per display.
    pub fn top_window_per_display(&self) -> TopWindows {
        let displays = self.list_displays();
        if displays.is_empty() {
            return TopWindows::default();
        }
        let windows = self.list_top_level_windows();
        associate(&windows, &displays)
    }
}
