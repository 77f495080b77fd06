//! Platform-specific backends.
//!
//! Each backend feeds native pointer input into the shared engine and
//! renders the engine's marker state:
//! - Input interception (low-level mouse hook / global event monitors)
//! - Overlay windows and drawing
//! - Configuration persistence

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;
