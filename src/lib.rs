//! Pure engine and helpers used by the overlay app. Keep this tree free of
//! platform FFI so tests can run as normal integration tests on any host.
//!
//! The crate splits into:
//! - [`model`]: configuration values and constants (no FFI)
//! - [`input`]: contact/event types and the dispatch interception latch
//! - [`engine`]: the visualizer lifecycle engine (pool, views, log)
//! - [`surface`]: the abstract rendering collaborator the engine drives
//!
//! Platform backends (`platform::windows`, `platform::macos`) feed platform
//! input into [`engine::Visualizer::handle_event`] and render from the
//! [`surface::MarkerStore`] each frame. Hosts on other platforms can embed
//! the engine directly and forward their own events.

pub mod engine;
pub mod input;
pub mod model;
pub mod platform;
pub mod surface;

// Re-export the main types for convenience
pub use engine::Visualizer;
pub use input::{Contact, ContactId, ContactPhase, PointerEvent};
pub use model::OverlayConfig;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Convert RGBA floats [0..1] to #RRGGBB or #RRGGBBAA (if alpha < 1).
pub fn color_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    let ri = (clamp(r, 0.0, 1.0) * 255.0).round() as u8;
    let gi = (clamp(g, 0.0, 1.0) * 255.0).round() as u8;
    let bi = (clamp(b, 0.0, 1.0) * 255.0).round() as u8;
    let ai = (clamp(a, 0.0, 1.0) * 255.0).round() as u8;
    if ai == 255 {
        format!("#{:02X}{:02X}{:02X}", ri, gi, bi)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", ri, gi, bi, ai)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into normalised floats [0..1].
pub fn parse_hex_color(s: &str) -> Option<(f64, f64, f64, f64)> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let (r, g, b, a) = match hex.len() {
        6 => {
            let rv = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let gv = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let bv = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (rv, gv, bv, 255u8)
        }
        8 => {
            let rv = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let gv = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let bv = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let av = u8::from_str_radix(&hex[6..8], 16).ok()?;
            (rv, gv, bv, av)
        }
        _ => return None,
    };
    Some((
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    ))
}
