//! Connected displays via AppKit.

use objc2::{rc::Retained, runtime::AnyObject};
use objc2_app_kit::NSScreen;
use objc2_foundation::{MainThreadMarker, NSNumber, NSString};
use tracing::trace;
use winswap_core::{Display, Rect};

use crate::coords::display_from_appkit;

/// `NSScreenNumber` from the screen's device description.
fn screen_number(screen: &NSScreen) -> Option<u32> {
    let desc = screen.deviceDescription();
    let key = NSString::from_str("NSScreenNumber");
    let value: Retained<AnyObject> = desc.objectForKey(&key)?;
    value.downcast::<NSNumber>().ok().map(|n| n.as_u32())
}

/// Displays in AppKit order, frames in CoreGraphics global coordinates.
///
/// The first screen is the primary (menu bar) screen; its height anchors the
/// coordinate flip.
pub fn list_displays(mtm: MainThreadMarker) -> Vec<Display> {
    unsafe {
        let screens = NSScreen::screens(mtm);
        let Some(primary) = screens.iter().next() else {
            return Vec::new();
        };
        let primary_height = primary.frame().size.height;
        let mut out = Vec::new();
        for scr in screens.iter() {
            let fr = scr.frame();
            let frame = Rect::new(fr.origin.x, fr.origin.y, fr.size.width, fr.size.height);
            let name = scr.localizedName().to_string();
            if let Some(d) =
                display_from_appkit(screen_number(&scr), frame, primary_height, name)
            {
                trace!(id = d.id, frame = ?d.frame, name = %d.name, "display");
                out.push(d);
            }
        }
        out
    }
}
