//! Accessibility (AX) element lookup and `AXPosition` access.

use std::{cell::RefCell, collections::HashMap, ffi::c_void, ptr};

use core_foundation::{
    array::{CFArray, CFArrayGetCount, CFArrayGetTypeID, CFArrayGetValueAtIndex},
    base::{CFGetTypeID, CFRelease, CFRetain, CFTypeID, CFTypeRef, TCFType},
    number::{CFNumber, CFNumberGetTypeID},
    string::{CFString, CFStringRef},
};
use core_graphics::geometry::CGPoint;
use winswap_core::{Point, WindowId};

use crate::error::{Error, Result};

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXUIElementCreateApplication(pid: i32) -> *mut c_void;
    fn AXUIElementCopyAttributeValue(
        element: *mut c_void,
        attr: CFStringRef,
        value: *mut CFTypeRef,
    ) -> i32;
    fn AXUIElementSetAttributeValue(element: *mut c_void, attr: CFStringRef, value: CFTypeRef)
    -> i32;
    fn AXValueCreate(theType: i32, valuePtr: *const c_void) -> CFTypeRef;
    fn AXValueGetValue(theValue: CFTypeRef, theType: i32, valuePtr: *mut c_void) -> bool;
}

/// `kAXValueCGPointType`.
const K_AX_VALUE_CGPOINT_TYPE: i32 = 1;
/// `kAXErrorInvalidUIElement`: window closed or reference stale.
const K_AX_ERROR_INVALID_UI_ELEMENT: i32 = -25202;

thread_local! {
    static ATTR_STRINGS: RefCell<HashMap<&'static str, CFString>> = RefCell::new(HashMap::new());
}

/// Stable CFStringRef for an attribute name, cached per thread.
fn cfstr(name: &'static str) -> CFStringRef {
    ATTR_STRINGS.with(|cell| {
        let mut m = cell.borrow_mut();
        let s = m.entry(name).or_insert_with(|| CFString::new(name));
        s.as_concrete_TypeRef()
    })
}

/// Map an `AXError` code onto our error type.
fn ax_result(err: i32) -> Result<()> {
    match err {
        0 => Ok(()),
        K_AX_ERROR_INVALID_UI_ELEMENT => Err(Error::WindowGone),
        code => Err(Error::AxCode(code)),
    }
}

/// Retained AX element for one window; released on drop.
#[derive(Debug)]
pub struct AxHandle(*mut c_void);

impl AxHandle {
    /// Take ownership of an element returned by a `Create`/`Copy` call.
    fn from_create(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() { None } else { Some(Self(ptr)) }
    }

    /// Retain an element borrowed from a container.
    fn retain_from_borrowed(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        unsafe { CFRetain(ptr as CFTypeRef) };
        Some(Self(ptr))
    }

    /// Raw element pointer.
    fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

impl Drop for AxHandle {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as CFTypeRef) };
    }
}

/// Copy an attribute value; the caller owns the returned reference.
fn copy_attr(element: *mut c_void, attr: &'static str) -> Result<CFTypeRef> {
    let mut v: CFTypeRef = ptr::null_mut();
    ax_result(unsafe { AXUIElementCopyAttributeValue(element, cfstr(attr), &mut v) })?;
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    Ok(v)
}

/// Keep an owned CF value only if it has type `expected`; otherwise release it.
fn expect_type(v: CFTypeRef, expected: CFTypeID) -> Result<CFTypeRef> {
    if unsafe { CFGetTypeID(v) } == expected {
        Ok(v)
    } else {
        unsafe { CFRelease(v) };
        Err(Error::Unsupported)
    }
}

/// `AXWindowNumber` of an AX window, when the app reports one.
fn window_number(element: *mut c_void) -> Option<u32> {
    let v = copy_attr(element, "AXWindowNumber").ok()?;
    let v = expect_type(v, unsafe { CFNumberGetTypeID() }).ok()?;
    let n = unsafe { CFNumber::wrap_under_create_rule(v as _) };
    n.to_i64().and_then(|v| u32::try_from(v).ok())
}

/// Find the AX window of `pid` whose `AXWindowNumber` equals `id`.
pub fn window_element(pid: i32, id: WindowId) -> Result<AxHandle> {
    let app = AxHandle::from_create(unsafe { AXUIElementCreateApplication(pid) })
        .ok_or(Error::AppElement(pid))?;
    let wins_ref = copy_attr(app.as_ptr(), "AXWindows")?;
    let wins_ref = expect_type(wins_ref, unsafe { CFArrayGetTypeID() })?;
    let arr = unsafe { CFArray::<*const c_void>::wrap_under_create_rule(wins_ref as _) };
    for i in 0..unsafe { CFArrayGetCount(arr.as_concrete_TypeRef()) } {
        let wref = unsafe { CFArrayGetValueAtIndex(arr.as_concrete_TypeRef(), i) } as *mut c_void;
        if wref.is_null() {
            continue;
        }
        if window_number(wref) == Some(id) {
            return AxHandle::retain_from_borrowed(wref).ok_or(Error::WindowNumber(id));
        }
    }
    Err(Error::WindowNumber(id))
}

/// Read `AXPosition` (top-left corner, global coordinates).
pub fn position(handle: &AxHandle) -> Result<Point> {
    let v = copy_attr(handle.as_ptr(), "AXPosition")?;
    let mut p = CGPoint::new(0.0, 0.0);
    let ok =
        unsafe { AXValueGetValue(v, K_AX_VALUE_CGPOINT_TYPE, &mut p as *mut _ as *mut c_void) };
    unsafe { CFRelease(v) };
    if !ok {
        return Err(Error::Unsupported);
    }
    Ok(Point::new(p.x, p.y))
}

/// Write `AXPosition`. Size is left alone.
pub fn set_position(handle: &AxHandle, to: Point) -> Result<()> {
    let p = CGPoint::new(to.x, to.y);
    let v = unsafe { AXValueCreate(K_AX_VALUE_CGPOINT_TYPE, &p as *const _ as *const c_void) };
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    let err = unsafe { AXUIElementSetAttributeValue(handle.as_ptr(), cfstr("AXPosition"), v) };
    unsafe { CFRelease(v) };
    ax_result(err)
}
