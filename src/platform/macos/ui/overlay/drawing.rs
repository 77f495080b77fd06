//! Drawing functions for the overlay view.
//!
//! Pure drawing logic kept out of the view's drawRect method. Still
//! unsafe FFI into Cocoa, but isolated and easy to follow.

use crate::model::{MarkerShape, LABEL_GAP};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nsstring_id, NSPoint, NSRect, NSSize,
};
use crate::surface::Marker;

const LABEL_FONT_SIZE: f64 = 14.0;

/// Draw one marker centered at `center` (view coordinates).
///
/// # Safety
/// Must be called from the main thread within a valid drawing context.
pub unsafe fn draw_marker(center: NSPoint, marker: &Marker) {
    let ns_color = get_class("NSColor");
    let ns_bezier = get_class("NSBezierPath");

    let radius = marker.style.size / 2.0 * marker.scale;
    let alpha = marker.alpha * marker.style.color.a;
    if radius <= 0.0 || alpha <= 0.0 {
        return;
    }

    let rect = NSRect::new(
        NSPoint::new(center.x - radius, center.y - radius),
        NSSize::new(radius * 2.0, radius * 2.0),
    );

    let circle: id = msg_send![ns_bezier, bezierPathWithOvalInRect: rect];

    let color: id = msg_send![
        ns_color,
        colorWithCalibratedRed: marker.style.color.r,
        green: marker.style.color.g,
        blue: marker.style.color.b,
        alpha: alpha
    ];
    let _: () = msg_send![color, set];

    match marker.style.shape {
        MarkerShape::Filled => {
            let _: () = msg_send![circle, fill];
        }
        MarkerShape::Ring { border_width } => {
            let _: () = msg_send![circle, setLineWidth: border_width];
            let _: () = msg_send![circle, stroke];
        }
    }

    if marker.style.shows_label && !marker.label.is_empty() {
        draw_label(center, radius, color, &marker.label);
    }
}

/// Draw the duration label below the marker.
///
/// # Safety
/// Must be called from the main thread within a valid drawing context.
unsafe fn draw_label(center: NSPoint, radius: f64, color: id, text: &str) {
    let font: id = msg_send![get_class("NSFont"), boldSystemFontOfSize: LABEL_FONT_SIZE];

    let attrs: id = msg_send![get_class("NSMutableDictionary"), dictionary];
    let _: () = msg_send![attrs, setObject: font, forKey: nsstring_id("NSFont")];
    let _: () = msg_send![attrs, setObject: color, forKey: nsstring_id("NSColor")];

    let ns_text = nsstring_id(text);
    let size: NSSize = msg_send![ns_text, sizeWithAttributes: attrs];

    // Cocoa y grows upward, so "below the marker" means smaller y.
    let at = NSPoint::new(
        center.x - size.width / 2.0,
        center.y - radius - LABEL_GAP - size.height,
    );
    let _: () = msg_send![ns_text, drawAtPoint: at, withAttributes: attrs];
}
