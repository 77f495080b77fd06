//! macOS configuration persistence.

pub mod preferences;

pub use preferences::load_config;
