//! Tests for the configuration model and the style resolution that feeds
//! the rendering surface.

#![allow(clippy::field_reassign_with_default)]

use tactus::model::{
    Color, MarkerShape, OverlayConfig, DEFAULT_BORDER_WIDTH, DEFAULT_MARKER_SIZE,
    FADE_OUT_DURATION, MAX_BORDER, MAX_MARKER_SIZE, MIN_BORDER, MIN_MARKER_SIZE,
};
use tactus::surface::MarkerStyle;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Constants Tests ===

#[test]
fn fade_out_lasts_200_milliseconds() {
    assert_eq!(FADE_OUT_DURATION.as_millis(), 200);
}

#[test]
fn marker_size_bounds_contain_the_default() {
    assert!(MIN_MARKER_SIZE <= DEFAULT_MARKER_SIZE);
    assert!(DEFAULT_MARKER_SIZE <= MAX_MARKER_SIZE);
}

#[test]
fn border_bounds_contain_the_default() {
    assert!(MIN_BORDER <= DEFAULT_BORDER_WIDTH);
    assert!(DEFAULT_BORDER_WIDTH <= MAX_BORDER);
}

// === Validation Tests ===

#[test]
fn validate_leaves_valid_config_unchanged() {
    let mut config = OverlayConfig::default();
    config.default_size = 100.0;
    config.shape = MarkerShape::Ring { border_width: 5.0 };
    let before = config.clone();
    config.validate();
    assert_eq!(config, before);
}

#[test]
fn validate_is_idempotent() {
    let mut config = OverlayConfig::default();
    config.default_size = -50.0;
    config.color = Color::new(3.0, 3.0, 3.0, 3.0);
    config.validate();
    let once = config.clone();
    config.validate();
    assert_eq!(config, once);
}

#[test]
fn validate_does_not_touch_filled_shape() {
    let mut config = OverlayConfig::default();
    config.shape = MarkerShape::Filled;
    config.validate();
    assert_eq!(config.shape, MarkerShape::Filled);
}

// === Style Resolution Tests ===

#[test]
fn style_copies_color_shape_and_size() {
    let config = OverlayConfig {
        color: Color::new(1.0, 0.0, 0.0, 0.5),
        shape: MarkerShape::Ring { border_width: 4.0 },
        default_size: 90.0,
        ..Default::default()
    };
    let style = MarkerStyle::from_config(&config);
    assert_eq!(style.color, config.color);
    assert_eq!(style.shape, config.shape);
    assert!(approx_eq(style.size, 90.0));
}

#[test]
fn style_label_follows_timer_setting() {
    let mut config = OverlayConfig::default();
    assert!(!MarkerStyle::from_config(&config).shows_label);
    config.shows_timer = true;
    assert!(MarkerStyle::from_config(&config).shows_label);
}

// === Color Tests ===

#[test]
fn default_color_is_translucent_blue() {
    let color = Color::default();
    assert!(color.b > color.r);
    assert!(approx_eq(color.a, 0.8));
}

#[test]
fn clamped_pins_components_to_unit_range() {
    let color = Color::new(-1.0, 0.5, 2.0, 1.5).clamped();
    assert!(approx_eq(color.r, 0.0));
    assert!(approx_eq(color.g, 0.5));
    assert!(approx_eq(color.b, 1.0));
    assert!(approx_eq(color.a, 1.0));
}
