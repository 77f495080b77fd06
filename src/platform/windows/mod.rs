//! Windows backend using Win32 and Direct2D.
//!
//! - Low-level mouse hook (WH_MOUSE_LL) feeding the engine
//! - Layered topmost overlay window rendered with Direct2D via
//!   UpdateLayeredWindow
//! - JSON config file persistence

pub mod app;
pub mod input;
pub mod storage;
pub mod ui;
