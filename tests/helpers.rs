//! Tests for the shared helper functions (clamp, hex color conversion).

use tactus::{clamp, color_to_hex, parse_hex_color};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === clamp ===

#[test]
fn clamp_within_range() {
    assert!(approx_eq(clamp(5.0, 0.0, 10.0), 5.0));
}

#[test]
fn clamp_below_range() {
    assert!(approx_eq(clamp(-5.0, 0.0, 10.0), 0.0));
}

#[test]
fn clamp_above_range() {
    assert!(approx_eq(clamp(15.0, 0.0, 10.0), 10.0));
}

#[test]
fn clamp_at_boundaries() {
    assert!(approx_eq(clamp(0.0, 0.0, 10.0), 0.0));
    assert!(approx_eq(clamp(10.0, 0.0, 10.0), 10.0));
}

// === color_to_hex ===

#[test]
fn color_to_hex_opaque_omits_alpha() {
    assert_eq!(color_to_hex(1.0, 0.0, 0.0, 1.0), "#FF0000");
    assert_eq!(color_to_hex(0.0, 1.0, 0.0, 1.0), "#00FF00");
    assert_eq!(color_to_hex(0.0, 0.0, 1.0, 1.0), "#0000FF");
}

#[test]
fn color_to_hex_translucent_includes_alpha() {
    let hex = color_to_hex(1.0, 1.0, 1.0, 0.5);
    assert_eq!(hex.len(), 9);
    assert!(hex.starts_with("#FFFFFF"));
}

#[test]
fn color_to_hex_clamps_out_of_range() {
    assert_eq!(color_to_hex(2.0, -1.0, 0.5, 1.0), "#FF0080");
}

// === parse_hex_color ===

#[test]
fn parse_hex_color_six_digits() {
    let (r, g, b, a) = parse_hex_color("#336699").unwrap();
    assert!(approx_eq(r, 51.0 / 255.0));
    assert!(approx_eq(g, 102.0 / 255.0));
    assert!(approx_eq(b, 153.0 / 255.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_hex_color_eight_digits() {
    let (_, _, _, a) = parse_hex_color("#33669980").unwrap();
    assert!(approx_eq(a, 128.0 / 255.0));
}

#[test]
fn parse_hex_color_without_hash() {
    assert!(parse_hex_color("336699").is_some());
}

#[test]
fn parse_hex_color_with_whitespace() {
    assert!(parse_hex_color("  #336699  ").is_some());
}

#[test]
fn parse_hex_color_rejects_invalid() {
    assert!(parse_hex_color("#12345").is_none());
    assert!(parse_hex_color("#GGGGGG").is_none());
    assert!(parse_hex_color("").is_none());
}

#[test]
fn hex_roundtrip_preserves_components() {
    let hex = color_to_hex(0.2, 0.4, 0.6, 0.8);
    let (r, g, b, a) = parse_hex_color(&hex).unwrap();
    // Quantised to 8 bits per channel, so allow 1/255 of slack.
    assert!((r - 0.2).abs() < 1.0 / 255.0);
    assert!((g - 0.4).abs() < 1.0 / 255.0);
    assert!((b - 0.6).abs() < 1.0 / 255.0);
    assert!((a - 0.8).abs() < 1.0 / 255.0);
}
