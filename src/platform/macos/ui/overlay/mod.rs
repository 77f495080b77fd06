//! Per-screen overlay window and view.

pub mod drawing;
pub mod view;
pub mod window;

pub use view::register_and_create_view;
pub use window::make_window_for_screen;
