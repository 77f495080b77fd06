//! macOS UI components.

pub mod overlay;

pub use overlay::{make_window_for_screen, register_and_create_view};
