//! macOS backend using Cocoa/AppKit via objc2.
//!
//! - Global NSEvent monitors feeding the engine
//! - One borderless click-through overlay window per screen
//! - NSUserDefaults persistence

pub mod app;
pub mod ffi;
pub mod input;
pub mod storage;
pub mod ui;
