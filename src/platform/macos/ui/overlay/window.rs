//! Transparent overlay windows.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSRect, NO, YES};
use crate::platform::macos::ffi::overlay_window_level;

use super::view::register_and_create_view;

/// Create a transparent, click-through overlay window covering `screen`,
/// with its content view ready to draw markers.
///
/// # Safety
/// The screen must be a valid NSScreen instance. Must be called from the
/// main thread.
pub unsafe fn make_window_for_screen(screen: id) -> (id, id) {
    let frame: NSRect = msg_send![screen, frame];

    // NSBorderlessWindowMask = 0
    let style_mask: u64 = 0;
    // NSBackingStoreBuffered = 2
    let backing: u64 = 2;

    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: style_mask,
        backing: backing,
        defer: NO
    ];

    let _: () = msg_send![window, setOpaque: NO];

    let clear_color: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![window, setBackgroundColor: clear_color];

    let _: () = msg_send![window, setIgnoresMouseEvents: YES];
    let _: () = msg_send![window, setAcceptsMouseMovedEvents: YES];
    let _: () = msg_send![window, setLevel: overlay_window_level()];

    // NSWindowCollectionBehaviorCanJoinAllSpaces = 1 << 0 = 1
    // NSWindowCollectionBehaviorFullScreenAuxiliary = 1 << 8 = 256
    // NSWindowCollectionBehaviorStationary = 1 << 4 = 16
    let collection_behavior: u64 = 1 | 256 | 16;
    let _: () = msg_send![window, setCollectionBehavior: collection_behavior];

    let view = register_and_create_view(window, frame.size.width, frame.size.height);

    (window, view)
}
