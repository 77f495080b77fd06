//! macOS FFI helpers.

pub mod bridge;

use bridge::id;
use objc2_app_kit::NSEvent;

/// Window level slightly above context menus and Dock.
pub fn nspop_up_menu_window_level() -> i64 {
    201
}

/// Window level for the overlay (above popup menus).
pub fn overlay_window_level() -> i64 {
    nspop_up_menu_window_level() + 1
}

/// Global mouse position in Cocoa coordinates (origin bottom-left).
pub fn mouse_location() -> (f64, f64) {
    let p = NSEvent::mouseLocation();
    (p.x, p.y)
}

/// Screen-coordinate location of an event. Global monitor events carry no
/// window, so locationInWindow is already in screen coordinates.
///
/// # Safety
/// `event` must be a valid NSEvent.
pub unsafe fn event_screen_location(event: id) -> (f64, f64) {
    use bridge::{msg_send, nil, NSPoint};
    let window: id = msg_send![event, window];
    if window == nil {
        let p: NSPoint = msg_send![event, locationInWindow];
        (p.x, p.y)
    } else {
        mouse_location()
    }
}
