//! macOS input interception.

pub mod monitors;

pub use monitors::{install_event_monitors, install_screen_observer};
