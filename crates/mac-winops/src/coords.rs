//! Platform-independent conversions used by the macOS service.

use tracing::warn;
use winswap_core::{Display, DisplayId, Rect, WindowListOptions};

/// `kCGWindowListOptionOnScreenOnly`.
pub const CG_OPTION_ON_SCREEN_ONLY: u32 = 1 << 0;
/// `kCGWindowListExcludeDesktopElements`.
pub const CG_OPTION_EXCLUDE_DESKTOP_ELEMENTS: u32 = 1 << 4;

/// CoreGraphics option mask for a window list request.
pub fn window_list_mask(options: WindowListOptions) -> u32 {
    let mut mask = 0;
    if options.on_screen_only {
        mask |= CG_OPTION_ON_SCREEN_ONLY;
    }
    if options.exclude_desktop_elements {
        mask |= CG_OPTION_EXCLUDE_DESKTOP_ELEMENTS;
    }
    mask
}

/// Convert an AppKit screen frame (bottom-left origin, y up) into the
/// CoreGraphics global space windows are reported in (top-left origin, y down).
///
/// `primary_height` is the height of the screen that holds the menu bar,
/// which anchors both coordinate systems at its corners.
pub fn appkit_to_global(frame: Rect, primary_height: f64) -> Rect {
    Rect::new(frame.x, primary_height - (frame.y + frame.h), frame.w, frame.h)
}

/// Build a [`Display`] from AppKit screen data.
///
/// Screens without an `NSScreenNumber` are skipped: displays are keyed by id,
/// so a made-up id could merge two screens.
pub fn display_from_appkit(
    number: Option<DisplayId>,
    frame: Rect,
    primary_height: f64,
    name: String,
) -> Option<Display> {
    let Some(id) = number else {
        warn!(name = %name, "screen has no NSScreenNumber; skipping");
        return None;
    };
    Some(Display::new(id, appkit_to_global(frame, primary_height), name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_screen_is_unchanged() {
        let f = Rect::new(0.0, 0.0, 1512.0, 982.0);
        assert_eq!(appkit_to_global(f, 982.0), f);
    }

    #[test]
    fn screen_above_primary_gets_negative_y() {
        // External monitor stacked on top of a 1080px-high primary.
        let appkit = Rect::new(0.0, 1080.0, 2560.0, 1440.0);
        assert_eq!(
            appkit_to_global(appkit, 1080.0),
            Rect::new(0.0, -1440.0, 2560.0, 1440.0)
        );
    }

    #[test]
    fn shorter_side_screen_is_bottom_aligned() {
        let appkit = Rect::new(1920.0, 0.0, 1280.0, 800.0);
        assert_eq!(
            appkit_to_global(appkit, 1080.0),
            Rect::new(1920.0, 280.0, 1280.0, 800.0)
        );
    }

    #[test]
    fn visible_options_set_both_bits() {
        assert_eq!(window_list_mask(WindowListOptions::VISIBLE), 0b1_0001);
        let none = WindowListOptions {
            on_screen_only: false,
            exclude_desktop_elements: false,
        };
        assert_eq!(window_list_mask(none), 0);
    }

    #[test]
    fn screen_without_number_is_skipped() {
        let f = Rect::new(1920.0, 0.0, 1280.0, 800.0);
        assert_eq!(display_from_appkit(None, f, 1080.0, "Sidecar".into()), None);
        let d = display_from_appkit(Some(69_734_272), f, 1080.0, "Sidecar".into())
            .expect("display");
        assert_eq!(d.id, 69_734_272);
        assert_eq!(d.frame, Rect::new(1920.0, 280.0, 1280.0, 800.0));
    }
}
