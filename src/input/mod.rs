//! Input types and the dispatch interception latch.
//!
//! Platform backends translate native pointer/touch input into
//! [`PointerEvent`] values and feed them to the engine. The [`EventTap`]
//! latch guarantees the native interception hook is installed at most once
//! per process.

pub mod contact;
pub mod tap;

pub use contact::{Contact, ContactId, ContactPhase, PointerEvent};
pub use tap::{EventTap, TapStatus, TAP};
