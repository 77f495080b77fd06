//! JSON configuration file for Windows.
//!
//! Reads settings from %APPDATA%/Tactus/config.json at startup. The file
//! is edited by hand (or by an external tool); the overlay itself never
//! writes it. An in-memory cache keeps repeated reads off the disk.

use serde::Deserialize;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::model::constants::*;
use crate::model::{Color, MarkerShape, OverlayConfig};

/// Deserializable config structure matching the JSON file layout.
#[derive(Deserialize, Debug, Clone)]
struct Config {
    /// Marker color as `#RRGGBB` or `#RRGGBBAA`.
    color: String,
    marker_size: f64,
    ring_marker: bool,
    border_width: f64,
    shows_timer: bool,
    shows_touch_radius: bool,
    shows_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_hex(),
            marker_size: DEFAULT_MARKER_SIZE,
            ring_marker: false,
            border_width: DEFAULT_BORDER_WIDTH,
            shows_timer: false,
            shows_touch_radius: false,
            shows_log: false,
        }
    }
}

// In-memory config cache, loaded on first use.
thread_local! {
    static CONFIG_CACHE: RefCell<Option<Config>> = const { RefCell::new(None) };
}

/// Get config file path: %APPDATA%/Tactus/config.json
fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join("Tactus").join("config.json")
}

/// Load config from JSON file, returning defaults if not found or invalid.
fn load_config_from_disk() -> Config {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

/// Get the cached config, loading from disk if needed.
fn get_config() -> Config {
    CONFIG_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(load_config_from_disk());
        }
        cache.clone().unwrap_or_default()
    })
}

/// Load the overlay configuration from the config file.
pub fn load_config() -> OverlayConfig {
    let config = get_config();
    let mut overlay = OverlayConfig {
        color: Color::from_hex(&config.color).unwrap_or_default(),
        shape: if config.ring_marker {
            MarkerShape::Ring {
                border_width: config.border_width,
            }
        } else {
            MarkerShape::Filled
        },
        default_size: config.marker_size,
        shows_timer: config.shows_timer,
        shows_touch_radius: config.shows_touch_radius,
        shows_log: config.shows_log,
    };
    overlay.validate();
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert!((config.marker_size - DEFAULT_MARKER_SIZE).abs() < f64::EPSILON);
        assert!(!config.ring_marker);
        assert_eq!(config.color, DEFAULT_COLOR.to_hex());
    }

    #[test]
    fn config_deserializes_from_file_layout() {
        let json = r##"{
            "color": "#FF8800",
            "marker_size": 42.0,
            "ring_marker": true,
            "border_width": 5.0,
            "shows_timer": true,
            "shows_touch_radius": false,
            "shows_log": true
        }"##;
        let loaded: Config = serde_json::from_str(json).unwrap();
        assert!((loaded.marker_size - 42.0).abs() < f64::EPSILON);
        assert!(loaded.ring_marker);
        assert!(loaded.shows_timer);
        assert_eq!(loaded.color, "#FF8800");
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let loaded: Config = serde_json::from_str("not json").unwrap_or_default();
        assert!((loaded.marker_size - DEFAULT_MARKER_SIZE).abs() < f64::EPSILON);
        assert!(!loaded.shows_log);
    }
}
