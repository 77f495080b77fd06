//! Windows runtime state management.
//!
//! Everything runs on the message-loop thread, so the runtime lives in a
//! thread-local RefCell. The hook procedure and the frame timer both go
//! through `STATE`.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;

use crate::engine::Visualizer;
use crate::model::OverlayConfig;
use crate::surface::MarkerStore;

/// Windows-specific runtime state.
///
/// Holds the window handle and geometry of the overlay window plus the
/// shared engine. `offset_x`/`offset_y` translate virtual-screen cursor
/// coordinates into overlay coordinates.
pub struct WindowsRuntime {
    pub hwnd: HWND,
    pub width: i32,
    pub height: i32,
    pub offset_x: i32,
    pub offset_y: i32,

    /// Last configuration loaded from disk, re-installed on toggle.
    pub config: OverlayConfig,

    /// The shared lifecycle engine rendering into a retained marker store.
    pub engine: Visualizer<MarkerStore>,

    /// Whether the primary button is currently down. The hook only
    /// forwards move events while a press is active.
    pub pointer_down: bool,
}

impl Default for WindowsRuntime {
    fn default() -> Self {
        Self {
            hwnd: HWND::default(),
            width: 0,
            height: 0,
            offset_x: 0,
            offset_y: 0,
            config: OverlayConfig::default(),
            engine: Visualizer::new(MarkerStore::new()),
            pointer_down: false,
        }
    }
}

thread_local! {
    /// Global runtime state for the Windows overlay.
    pub static STATE: RefCell<WindowsRuntime> = RefCell::new(WindowsRuntime::default());
}
