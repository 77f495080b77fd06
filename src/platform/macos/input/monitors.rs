//! Global NSEvent monitors.
//!
//! Translates system-wide mouse button presses and drags into contact
//! events for the engine. Monitors observe only; AppKit delivers the
//! events to their real targets unchanged.

use std::time::Instant;

use crate::input::{Contact, ContactId, ContactPhase, PointerEvent};
use crate::model::Point;
use crate::platform::macos::app::{request_redraw, with_engine};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, RcBlock};
use crate::platform::macos::ffi::event_screen_location;

/// The mouse pointer is the only contact on this platform.
const POINTER_CONTACT: ContactId = ContactId(0);

unsafe fn forward(event: id, phase: ContactPhase) {
    let (x, y) = event_screen_location(event);
    let contact = Contact {
        id: POINTER_CONTACT,
        phase,
        position: Point::new(x, y),
        // NSEvent has no contact geometry for mouse input.
        radius: 0.0,
    };
    with_engine(|engine| engine.handle_event(&PointerEvent::single(contact), Instant::now()));
    request_redraw();
}

/// Install global mouse monitors feeding the engine.
///
/// Returns false when the system refuses every monitor (typically a
/// missing Accessibility permission), so the install latch can stay open.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn install_event_monitors() -> bool {
    // NSEvent masks: leftDown=1<<1, leftUp=1<<2, leftDragged=1<<6
    const LEFT_DOWN_MASK: u64 = 1 << 1;
    const LEFT_UP_MASK: u64 = 1 << 2;
    const LEFT_DRAGGED_MASK: u64 = 1 << 6;

    let cls = get_class("NSEvent");

    let down = RcBlock::new(move |e: id| unsafe {
        forward(e, ContactPhase::Began);
    });
    let mon_down: id =
        msg_send![cls, addGlobalMonitorForEventsMatchingMask: LEFT_DOWN_MASK, handler: &*down];

    let dragged = RcBlock::new(move |e: id| unsafe {
        forward(e, ContactPhase::Moved);
    });
    let mon_dragged: id =
        msg_send![cls, addGlobalMonitorForEventsMatchingMask: LEFT_DRAGGED_MASK, handler: &*dragged];

    let up = RcBlock::new(move |e: id| unsafe {
        forward(e, ContactPhase::Ended);
    });
    let mon_up: id =
        msg_send![cls, addGlobalMonitorForEventsMatchingMask: LEFT_UP_MASK, handler: &*up];

    // AppKit copies the handler blocks, so the RcBlocks may drop here.
    mon_down != nil && mon_dragged != nil && mon_up != nil
}

/// Observe screen layout changes and drop markers tied to the old
/// geometry.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn install_screen_observer() {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let block = RcBlock::new(move |_note: id| {
        with_engine(|engine| engine.surface_changed());
        request_redraw();
    });

    let name = nsstring_id("NSApplicationDidChangeScreenParametersNotification");
    let _: id = msg_send![
        center,
        addObserverForName: name,
        object: nil,
        queue: nil,
        usingBlock: &*block
    ];
}
