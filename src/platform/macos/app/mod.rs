//! macOS application state.
//!
//! Everything runs on the AppKit main thread, so the engine and the view
//! list live in thread-locals. Event monitor blocks and timer callbacks
//! all go through `with_engine`.

use std::cell::RefCell;

use crate::engine::Visualizer;
use crate::surface::MarkerStore;

use super::ffi::bridge::{id, msg_send, YES};

thread_local! {
    /// The shared lifecycle engine rendering into a retained marker store.
    pub static ENGINE: RefCell<Visualizer<MarkerStore>> =
        RefCell::new(Visualizer::new(MarkerStore::new()));

    /// One overlay view per screen, retained for the process lifetime.
    static VIEWS: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Run a closure with mutable access to the engine.
pub fn with_engine<R>(f: impl FnOnce(&mut Visualizer<MarkerStore>) -> R) -> R {
    ENGINE.with(|e| f(&mut e.borrow_mut()))
}

/// Register an overlay view so redraw requests reach it.
///
/// # Safety
/// `view` must be a valid, retained NSView that outlives the process.
pub unsafe fn register_view(view: id) {
    VIEWS.with(|v| v.borrow_mut().push(view as usize));
}

/// Mark every overlay view as needing display.
pub fn request_redraw() {
    VIEWS.with(|v| {
        for &view in v.borrow().iter() {
            unsafe {
                let view = view as id;
                let _: () = msg_send![view, setNeedsDisplay: YES];
            }
        }
    });
}
