//! Overlay view class.
//!
//! An NSView subclass registered at runtime. It owns no state of its own:
//! drawRect reads the engine's marker store and the frame timer drives
//! [`crate::engine::Visualizer::tick`] through the `tickFrame` selector.

use std::time::Instant;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::platform::macos::app::{request_redraw, with_engine};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSPoint, NSRect, NSSize};

use super::drawing::draw_marker;

/// Register the overlay view class (once) and create an instance as the
/// window's content view.
///
/// # Safety
/// Must be called from the main thread. The window must be a valid
/// NSWindow.
pub unsafe fn register_and_create_view(window: id, width: f64, height: f64) -> id {
    let class_name = c"TactusOverlayView";
    let view_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSView").unwrap();
        let mut builder = ClassBuilder::new(class_name, superclass).unwrap();

        builder.add_method(
            sel!(drawRect:),
            draw_rect as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(tickFrame),
            tick_frame as unsafe extern "C-unwind" fn(_, _),
        );

        builder.register()
    };

    let view: id = msg_send![view_class, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));
    let view: id = msg_send![view, initWithFrame: frame];

    let _: () = msg_send![window, setContentView: view];
    view
}

/// Frame timer callback: advance animations and repaint.
unsafe extern "C-unwind" fn tick_frame(_this: *mut AnyObject, _sel: Sel) {
    with_engine(|engine| engine.tick(Instant::now()));
    request_redraw();
}

/// Draw every live marker that falls on this view's screen.
unsafe extern "C-unwind" fn draw_rect(this: *mut AnyObject, _sel: Sel, _rect: NSRect) {
    let window: id = msg_send![this, window];
    if window == nil {
        return;
    }
    // Marker positions are global Cocoa coordinates; the window covers one
    // screen, so subtracting its frame origin yields view coordinates.
    let frame: NSRect = msg_send![window, frame];

    with_engine(|engine| {
        for (_, marker) in engine.surface().markers() {
            let center = NSPoint::new(
                marker.position.x - frame.origin.x,
                marker.position.y - frame.origin.y,
            );
            draw_marker(center, marker);
        }
    });
}
