//! Windows UI components.

pub mod overlay;
