//! Layered overlay window rendering.

pub mod renderer;

pub use renderer::{create_label_text_format, update_overlay, D2D_FACTORY, TEXT_FORMAT};
