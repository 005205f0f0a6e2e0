//! Plain-text rendering of detection results and permission state.

use permissions::PermissionsStatus;
use winswap_core::{Display, Rect, TopWindows, WindowInfo};

/// Printed after a swap fails because an app refused to move its window.
pub const REPOSITION_TIP: &str = "Tip: Some applications (like certain system apps or full-screen windows)
   may not allow their windows to be repositioned programmatically.
   Try with different applications.";

/// Render an origin as integer screen coordinates.
fn origin(frame: &Rect) -> String {
    format!("({}, {})", frame.x as i64, frame.y as i64)
}

/// Heading line for display number `index` (zero-based).
fn screen_heading(index: usize, display: &Display) -> String {
    format!("Screen {}: {}", index + 1, display.name)
}

/// One display with resolution, position and its front window.
pub fn display_summary(index: usize, display: &Display, top: Option<&WindowInfo>) -> String {
    let mut lines = vec![
        screen_heading(index, display),
        format!(
            "  Resolution: {}x{}",
            display.frame.w as i64, display.frame.h as i64
        ),
        format!("  Position: {}", origin(&display.frame)),
    ];
    match top {
        Some(w) => {
            lines.push("  Top Window:".to_string());
            lines.push(format!("    {w}"));
        }
        None => lines.push("  Top Window: None detected".to_string()),
    }
    lines.join("\n")
}

/// Follow-up note when some displays have no window, if any.
pub fn coverage_note(displays: usize, top: &TopWindows) -> Option<&'static str> {
    if top.is_empty() {
        Some("No windows detected on any screen. Make sure at least one window is visible.")
    } else if top.len() < displays {
        Some("Some screens don't have any detectable windows.")
    } else {
        None
    }
}

/// Numbered front-to-back window list, truncated to `limit` entries.
pub fn window_list(windows: &[WindowInfo], limit: usize) -> Vec<String> {
    let mut out = vec![format!("Total windows detected: {}", windows.len())];
    if windows.is_empty() {
        return out;
    }
    if windows.len() <= limit {
        out.push("All windows (front to back):".to_string());
    } else {
        out.push(format!("First {limit} windows (front to back):"));
    }
    out.extend(
        windows
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, w)| format!("  {}. {w}", i + 1)),
    );
    if windows.len() > limit {
        out.push(format!("  ... and {} more", windows.len() - limit));
    }
    out
}

/// Compact per-display view used before and after a swap.
pub fn configuration(displays: &[Display], top: &TopWindows, label: &str) -> String {
    let mut lines = Vec::new();
    for (i, d) in displays.iter().enumerate() {
        lines.push(screen_heading(i, d));
        match top.get(d.id) {
            Some(w) => {
                lines.push(format!("  {label}: {} - {}", w.app_label(), w.title_label()));
                lines.push(format!("  Position: {}", origin(&w.frame)));
            }
            None => lines.push("  No window detected".to_string()),
        }
    }
    lines.join("\n")
}

/// Permission summary with guidance when Accessibility is missing.
pub fn permission_status(status: &PermissionsStatus) -> String {
    let label = |ok: bool| if ok { "granted" } else { "missing" };
    let mut lines = vec![
        format!("Accessibility: {}", label(status.accessibility_ok)),
        format!(
            "Screen Recording: {} (needed for window titles)",
            label(status.screen_recording_ok)
        ),
    ];
    if !status.can_move_windows() {
        lines.push(String::new());
        lines.push("Grant Accessibility access in System Settings > Privacy & Security > Accessibility,".into());
        lines.push("then run this tool again.".into());
        lines.push(format!("  open \"{}\"", permissions::ACCESSIBILITY_SETTINGS_URL));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use winswap_core::associate;

    use super::*;

    fn displays() -> Vec<Display> {
        vec![
            Display::new(1, Rect::new(0.0, 0.0, 1512.0, 982.0), "Built-in Retina Display"),
            Display::new(2, Rect::new(1512.0, -200.0, 2560.0, 1440.0), "LG HDR 4K"),
        ]
    }

    fn window(id: u32) -> WindowInfo {
        WindowInfo::new(id, 900 + id as i32, Rect::new(10.5, 20.9, 800.0, 600.0))
            .with_app("Terminal")
            .with_title("zsh")
    }

    #[test]
    fn summary_shows_top_window_or_none() {
        let d = &displays()[1];
        let w = window(3);
        assert_eq!(
            display_summary(1, d, Some(&w)),
            "Screen 2: LG HDR 4K\n  Resolution: 2560x1440\n  Position: (1512, -200)\n  Top Window:\n    Window ID: 3, App: Terminal, Title: \"zsh\", Position: (10, 20), Size: 800x600, PID: 903"
        );
        assert!(display_summary(0, d, None).ends_with("Top Window: None detected"));
    }

    #[test]
    fn window_list_truncates_with_remainder() {
        let windows: Vec<WindowInfo> = (1..=12).map(window).collect();
        let lines = window_list(&windows, 10);
        assert_eq!(lines[0], "Total windows detected: 12");
        assert_eq!(lines[1], "First 10 windows (front to back):");
        assert!(lines[2].starts_with("  1. Window ID: 1,"));
        assert_eq!(lines.last().map(String::as_str), Some("  ... and 2 more"));
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn short_window_list_is_complete() {
        let lines = window_list(&[window(1)], 10);
        assert_eq!(lines[1], "All windows (front to back):");
        assert_eq!(lines.len(), 3);
        assert_eq!(window_list(&[], 10), vec!["Total windows detected: 0"]);
    }

    #[test]
    fn configuration_uses_labels_and_fallbacks() {
        let ds = displays();
        let w = WindowInfo::new(5, 1, Rect::new(100.0, 100.0, 300.0, 200.0));
        let top = associate(&[w], &ds);
        let text = configuration(&ds, &top, "Current top window");
        assert_eq!(
            text,
            "Screen 1: Built-in Retina Display\n  Current top window: Unknown - No title\n  Position: (100, 100)\nScreen 2: LG HDR 4K\n  No window detected"
        );
    }

    #[test]
    fn coverage_notes() {
        let ds = displays();
        assert!(coverage_note(2, &associate(&[], &ds)).is_some());
        let one = associate(&[window(1)], &ds);
        assert_eq!(
            coverage_note(2, &one),
            Some("Some screens don't have any detectable windows.")
        );
        assert_eq!(coverage_note(1, &one), None);
    }

    #[test]
    fn permissions_guidance_only_when_missing() {
        let granted = PermissionsStatus {
            accessibility_ok: true,
            screen_recording_ok: false,
        };
        let text = permission_status(&granted);
        assert!(text.starts_with("Accessibility: granted"));
        assert!(!text.contains("System Settings"));

        let missing = PermissionsStatus {
            accessibility_ok: false,
            screen_recording_ok: true,
        };
        let text = permission_status(&missing);
        assert!(text.contains("Accessibility: missing"));
        assert!(text.contains(permissions::ACCESSIBILITY_SETTINGS_URL));
    }
}
