//! Permission checks for moving other applications' windows.
//!
//! - `accessibility_ok()` checks the global Accessibility permission, which
//!   is needed to read and write window positions.
//! - `request_accessibility()` does the same check but asks macOS to show its
//!   trust prompt when the permission is missing.
//! - `screen_recording_ok()` checks Screen Recording, without which the
//!   window server omits window titles.
//!
//! On other platforms every check reports `false`.

/// System Settings pane for granting Accessibility access.
pub const ACCESSIBILITY_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility";

#[cfg(target_os = "macos")]
mod sys {
    use core_foundation::{
        base::TCFType,
        boolean::CFBoolean,
        dictionary::{CFDictionary, CFDictionaryRef},
        string::CFString,
    };

    #[link(name = "ApplicationServices", kind = "framework")]
    unsafe extern "C" {
        fn AXIsProcessTrusted() -> bool;
        fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> bool;
        fn CGPreflightScreenCaptureAccess() -> bool;
    }

    pub fn accessibility_ok() -> bool {
        unsafe { AXIsProcessTrusted() }
    }

    pub fn request_accessibility() -> bool {
        // Value of `kAXTrustedCheckOptionPrompt`.
        let key = CFString::from_static_string("AXTrustedCheckOptionPrompt");
        let opts = CFDictionary::from_CFType_pairs(&[(key, CFBoolean::true_value())]);
        unsafe { AXIsProcessTrustedWithOptions(opts.as_concrete_TypeRef()) }
    }

    pub fn screen_recording_ok() -> bool {
        unsafe { CGPreflightScreenCaptureAccess() }
    }
}

#[cfg(not(target_os = "macos"))]
mod sys {
    pub fn accessibility_ok() -> bool {
        false
    }

    pub fn request_accessibility() -> bool {
        false
    }

    pub fn screen_recording_ok() -> bool {
        false
    }
}

/// Check if the process is trusted for Accessibility.
pub fn accessibility_ok() -> bool {
    sys::accessibility_ok()
}

/// Check Accessibility trust, asking macOS to prompt the user if missing.
///
/// The prompt is asynchronous: a grant made from it is only observed by
/// later calls, usually after the process restarts.
pub fn request_accessibility() -> bool {
    sys::request_accessibility()
}

/// Check if the application has the "Screen Recording" permission.
///
/// Without it, `CGWindowListCopyWindowInfo` omits window titles.
pub fn screen_recording_ok() -> bool {
    sys::screen_recording_ok()
}

/// Current permission status for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionsStatus {
    /// Accessibility (AX) permission; `true` if granted.
    pub accessibility_ok: bool,
    /// Screen Recording permission; `true` if granted.
    pub screen_recording_ok: bool,
}

impl PermissionsStatus {
    /// True when window positions can be changed.
    pub fn can_move_windows(&self) -> bool {
        self.accessibility_ok
    }
}

/// Query Accessibility and Screen Recording without prompting.
pub fn check_permissions() -> PermissionsStatus {
    PermissionsStatus {
        accessibility_ok: accessibility_ok(),
        screen_recording_ok: screen_recording_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_url_targets_accessibility_pane() {
        assert!(ACCESSIBILITY_SETTINGS_URL.ends_with("Privacy_Accessibility"));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn non_macos_reports_nothing_granted() {
        let st = check_permissions();
        assert!(!st.can_move_windows());
        assert!(!st.screen_recording_ok);
        assert!(!request_accessibility());
    }
}
