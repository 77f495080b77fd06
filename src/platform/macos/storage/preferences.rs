//! Overlay configuration read from NSUserDefaults.
//!
//! Settings are written externally (`defaults write` or a host app); the
//! overlay only reads them at startup.

use crate::model::constants::*;
use crate::model::{Color, MarkerShape, OverlayConfig};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};

/// Reads a double from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str, default: f64) -> f64 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, doubleForKey: k]
    }
}

/// Reads a bool from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, boolForKey: k]
    }
}

/// Reads a string from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str, default: &str) -> String {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, stringForKey: k];
    if obj == nil {
        return default.to_string();
    }
    let utf8: *const std::os::raw::c_char = msg_send![obj, UTF8String];
    if utf8.is_null() {
        return default.to_string();
    }
    std::ffi::CStr::from_ptr(utf8).to_string_lossy().into_owned()
}

/// Loads the complete overlay configuration from NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_config() -> OverlayConfig {
    let hex = prefs_get_string(PREF_COLOR, &DEFAULT_COLOR.to_hex());
    let ring = prefs_get_bool(PREF_RING, false);
    let border = prefs_get_double(PREF_BORDER, DEFAULT_BORDER_WIDTH);
    let mut config = OverlayConfig {
        color: Color::from_hex(&hex).unwrap_or_default(),
        shape: if ring {
            MarkerShape::Ring {
                border_width: border,
            }
        } else {
            MarkerShape::Filled
        },
        default_size: prefs_get_double(PREF_MARKER_SIZE, DEFAULT_MARKER_SIZE),
        shows_timer: prefs_get_bool(PREF_SHOWS_TIMER, false),
        shows_touch_radius: prefs_get_bool(PREF_SHOWS_RADIUS, false),
        shows_log: prefs_get_bool(PREF_SHOWS_LOG, false),
    };
    config.validate();
    config
}
