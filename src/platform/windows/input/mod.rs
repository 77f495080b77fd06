//! Windows input interception.

pub mod hooks;

pub use hooks::{
    mouse_hook_proc, HOTKEY_TOGGLE, MOUSE_HOOK, TIMER_FRAME, TIMER_INTERVAL_MS,
};
