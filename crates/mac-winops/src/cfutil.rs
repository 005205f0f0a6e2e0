use std::ffi::c_void;

use core_foundation::{
    base::TCFType,
    dictionary::{CFDictionaryGetValue, CFDictionaryRef},
    number::CFNumber,
    string::{CFString, CFStringRef},
};

/// Borrow the raw value stored under `key`, if any.
fn dict_value(dict: CFDictionaryRef, key: CFStringRef) -> Option<*const c_void> {
    let value = unsafe { CFDictionaryGetValue(dict, key as *const c_void) };
    (!value.is_null()).then_some(value)
}

/// Get a String value for the given CFDictionary key.
pub fn dict_get_string(dict: CFDictionaryRef, key: CFStringRef) -> Option<String> {
    let value = dict_value(dict, key)?;
    // SAFETY: window-list string values are CFStrings owned by the dictionary.
    let s = unsafe { CFString::wrap_under_get_rule(value as CFStringRef) };
    Some(s.to_string())
}

/// Get a 32-bit integer from CFDictionary for the given key.
pub fn dict_get_i32(dict: CFDictionaryRef, key: CFStringRef) -> Option<i32> {
    let value = dict_value(dict, key)?;
    let n = unsafe { CFNumber::wrap_under_get_rule(value as _) };
    n.to_i64().and_then(|v| i32::try_from(v).ok())
}

/// Get an f64 from CFDictionary for the given key.
pub fn dict_get_f64(dict: CFDictionaryRef, key: CFStringRef) -> Option<f64> {
    let value = dict_value(dict, key)?;
    let n = unsafe { CFNumber::wrap_under_get_rule(value as _) };
    n.to_f64()
}

/// Decode a `CGRect` dictionary representation (`X`, `Y`, `Width`, `Height`).
pub fn dict_get_rect(dict: CFDictionaryRef, key: CFStringRef) -> Option<(f64, f64, f64, f64)> {
    let rect = dict_value(dict, key)? as CFDictionaryRef;
    let field = |name: &'static str| {
        let k = CFString::from_static_string(name);
        dict_get_f64(rect, k.as_concrete_TypeRef())
    };
    Some((field("X")?, field("Y")?, field("Width")?, field("Height")?))
}
