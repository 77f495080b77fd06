//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the overlay configuration and its constants.
//!
//! Platform-specific persistence is in `platform::{macos,windows}::storage`.

pub mod config;
pub mod constants;
pub mod geometry;

pub use config::{Color, MarkerShape, OverlayConfig};
pub use constants::*;
pub use geometry::Point;
