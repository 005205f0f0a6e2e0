use std::ffi::c_void;

use core_foundation::{
    array::{CFArray, CFArrayGetCount, CFArrayGetValueAtIndex},
    base::{CFGetTypeID, CFTypeRef, TCFType},
    dictionary::{CFDictionaryGetTypeID, CFDictionaryRef},
};
use core_graphics::window as cgw;
use tracing::{trace, warn};
use winswap_core::{Rect, WindowInfo, WindowListOptions};

use crate::{
    cfutil::{dict_get_i32, dict_get_rect, dict_get_string},
    coords::window_list_mask,
};

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGWindowListCopyWindowInfo(option: u32, relativeToWindow: u32) -> CFTypeRef; // CFArrayRef
}

/// Snapshot of the window server's list, front to back.
///
/// Entries without an owner pid, a positive window number, a layer or bounds
/// are skipped. Empty app names and titles become `None`.
pub fn list_windows(options: WindowListOptions) -> Vec<WindowInfo> {
    let mask = window_list_mask(options);
    trace!(mask, "list_windows");
    let mut out = Vec::new();
    unsafe {
        let arr_ref = CGWindowListCopyWindowInfo(mask, 0);
        if arr_ref.is_null() {
            warn!("list_windows: CGWindowListCopyWindowInfo returned null");
            return out;
        }
        let arr: CFArray<*const c_void> = CFArray::wrap_under_create_rule(arr_ref as _);
        let key_pid = cgw::kCGWindowOwnerPID;
        let key_num = cgw::kCGWindowNumber;
        let key_layer = cgw::kCGWindowLayer;
        let key_bounds = cgw::kCGWindowBounds;
        let key_app = cgw::kCGWindowOwnerName;
        let key_title = cgw::kCGWindowName;
        for i in 0..CFArrayGetCount(arr.as_concrete_TypeRef()) {
            let item = CFArrayGetValueAtIndex(arr.as_concrete_TypeRef(), i) as CFTypeRef;
            if item.is_null() || CFGetTypeID(item) != CFDictionaryGetTypeID() {
                continue;
            }
            let d = item as CFDictionaryRef;
            let Some(pid) = dict_get_i32(d, key_pid) else {
                continue;
            };
            let id = match dict_get_i32(d, key_num) {
                Some(n) if n > 0 => n as u32,
                _ => continue,
            };
            let Some(layer) = dict_get_i32(d, key_layer) else {
                continue;
            };
            let Some((x, y, w, h)) = dict_get_rect(d, key_bounds) else {
                continue;
            };
            let mut info = WindowInfo::new(id, pid, Rect::new(x, y, w, h)).with_layer(layer);
            if let Some(app) = dict_get_string(d, key_app).filter(|s| !s.is_empty()) {
                info = info.with_app(app);
            }
            // Titles are only reported with Screen Recording permission.
            if let Some(title) = dict_get_string(d, key_title).filter(|s| !s.is_empty()) {
                info = info.with_title(title);
            }
            out.push(info);
        }
    }
    out
}
