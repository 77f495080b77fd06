//! Configuration constants and default values.
//!
//! This module contains all engine constants including visual defaults,
//! animation timing, persistence keys, and validation limits.

use std::time::Duration;

use super::config::Color;

// === Visual Defaults ===

/// Default marker diameter in pixels.
pub const DEFAULT_MARKER_SIZE: f64 = 60.0;

/// Default marker color - the classic demo blue at 80% opacity.
pub const DEFAULT_COLOR: Color = Color {
    r: 52.0 / 255.0,
    g: 152.0 / 255.0,
    b: 219.0 / 255.0,
    a: 0.8,
};

/// Default ring border width in pixels (ring-shaped markers only).
pub const DEFAULT_BORDER_WIDTH: f64 = 3.0;

// === Animation Timing ===

/// Duration of the fade-to-transparent animation after a contact ends.
pub const FADE_OUT_DURATION: Duration = Duration::from_millis(200);

// === Diagnostics ===

/// Prefix of every diagnostic log line.
pub const LOG_TAG: &str = "tactus";

/// Gap between a marker and its duration label, in pixels.
pub const LABEL_GAP: f64 = 8.0;

// === Persistence Keys ===

/// Key for the marker size preference.
pub const PREF_MARKER_SIZE: &str = "markerSize";

/// Key for the marker color preference (hex string).
pub const PREF_COLOR: &str = "markerColor";

/// Key for the ring-shape preference.
pub const PREF_RING: &str = "ringMarker";

/// Key for the ring border width preference.
pub const PREF_BORDER: &str = "borderWidth";

/// Key for the duration label preference.
pub const PREF_SHOWS_TIMER: &str = "showsTimer";

/// Key for the contact-radius scaling preference.
pub const PREF_SHOWS_RADIUS: &str = "showsTouchRadius";

/// Key for the diagnostic log preference.
pub const PREF_SHOWS_LOG: &str = "showsLog";

// === Validation Limits ===

/// Minimum marker diameter in pixels.
pub const MIN_MARKER_SIZE: f64 = 10.0;

/// Maximum marker diameter in pixels.
pub const MAX_MARKER_SIZE: f64 = 200.0;

/// Minimum ring border width in pixels.
pub const MIN_BORDER: f64 = 1.0;

/// Maximum ring border width in pixels.
pub const MAX_BORDER: f64 = 20.0;
