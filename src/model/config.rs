//! Overlay configuration (pure Rust, no FFI).
//!
//! The configuration is a value bundle supplied by a caller (settings UI,
//! config file, host application) and installed wholesale on each
//! `Visualizer::start_with` call. The engine never mutates it partially.

use crate::{clamp, color_to_hex, parse_hex_color};

use super::constants::*;

/// An RGBA color with components normalised to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Clamps all components to [0.0, 1.0].
    pub fn clamped(self) -> Self {
        Self {
            r: clamp(self.r, 0.0, 1.0),
            g: clamp(self.g, 0.0, 1.0),
            b: clamp(self.b, 0.0, 1.0),
            a: clamp(self.a, 0.0, 1.0),
        }
    }

    /// Formats as `#RRGGBB` or `#RRGGBBAA` (when alpha < 1).
    pub fn to_hex(self) -> String {
        color_to_hex(self.r, self.g, self.b, self.a)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex_color(s).map(|(r, g, b, a)| Self { r, g, b, a })
    }
}

impl Default for Color {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

/// Visual shape of a contact marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerShape {
    /// A filled disc.
    Filled,
    /// An unfilled ring with the given stroke width in pixels.
    Ring { border_width: f64 },
}

impl Default for MarkerShape {
    fn default() -> Self {
        MarkerShape::Filled
    }
}

/// Complete overlay configuration.
///
/// If `shows_touch_radius` is enabled and the platform reports contact
/// radii, markers scale with the contact; `default_size` then only sets the
/// baseline against which the radius ratio is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Marker color.
    pub color: Color,
    /// Marker shape.
    pub shape: MarkerShape,
    /// Default marker diameter in pixels.
    pub default_size: f64,
    /// Shows the elapsed-duration label next to each marker.
    pub shows_timer: bool,
    /// Scales markers with the reported contact radius. Has no visible
    /// effect on platforms that cannot report a radius.
    pub shows_touch_radius: bool,
    /// Emits one diagnostic log line per handled contact.
    pub shows_log: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            shape: MarkerShape::default(),
            default_size: DEFAULT_MARKER_SIZE,
            shows_timer: false,
            shows_touch_radius: false,
            shows_log: false,
        }
    }
}

impl OverlayConfig {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.default_size = clamp(self.default_size, MIN_MARKER_SIZE, MAX_MARKER_SIZE);
        self.color = self.color.clamped();
        if let MarkerShape::Ring { border_width } = &mut self.shape {
            *border_width = clamp(*border_width, MIN_BORDER, MAX_BORDER);
        }
    }
}
