//! Low-level mouse hook feeding the engine.
//!
//! The hook observes and forwards; it never swallows input. Every callback
//! ends in CallNextHookEx so the rest of the chain sees the event
//! unchanged.

use std::sync::atomic::{AtomicIsize, Ordering};
use std::time::Instant;

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, HHOOK, MSLLHOOKSTRUCT, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE,
};

use crate::input::{Contact, ContactId, ContactPhase, PointerEvent};
use crate::model::Point;
use crate::platform::windows::app::state::STATE;

// Hotkey IDs
pub const HOTKEY_TOGGLE: i32 = 1;

// Timer constants
pub const TIMER_FRAME: usize = 1;
pub const TIMER_INTERVAL_MS: u32 = 16; // ~60 FPS

/// The mouse pointer is the only contact on this platform.
const POINTER_CONTACT: ContactId = ContactId(0);

/// Global mouse hook handle (must be static for the hook callback).
pub static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Low-level mouse hook procedure translating button presses and drags
/// into contact events for the engine.
pub extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if ncode >= 0 {
            let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);
            let pt = info.pt;

            STATE.with(|s| {
                let mut state = s.borrow_mut();
                let phase = match wparam.0 as u32 {
                    WM_LBUTTONDOWN => {
                        state.pointer_down = true;
                        Some(ContactPhase::Began)
                    }
                    WM_MOUSEMOVE if state.pointer_down => Some(ContactPhase::Moved),
                    WM_LBUTTONUP => {
                        state.pointer_down = false;
                        Some(ContactPhase::Ended)
                    }
                    _ => None,
                };

                if let Some(phase) = phase {
                    let position = Point::new(
                        (pt.x - state.offset_x) as f64,
                        (pt.y - state.offset_y) as f64,
                    );
                    let contact = Contact {
                        id: POINTER_CONTACT,
                        phase,
                        position,
                        // WH_MOUSE_LL has no contact geometry.
                        radius: 0.0,
                    };
                    state
                        .engine
                        .handle_event(&PointerEvent::single(contact), Instant::now());
                }
            });
        }

        let hook = MOUSE_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}
