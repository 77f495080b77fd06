//! Contact and pointer-event types.
//!
//! A "contact" is one finger, pen tip, or pointer button press. Its
//! identity is stable from the moment it begins until it ends or is
//! cancelled, even across position changes. Platform backends choose the
//! identity scheme (a mouse backend can use a single fixed id, a touch
//! digitizer hands out one id per finger).

use crate::model::Point;

/// Stable identity of one contact for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub u64);

/// Lifecycle phase of a contact at the time an event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// The contact just landed.
    Began,
    /// The contact moved to a new position.
    Moved,
    /// The contact is still down but did not move.
    Stationary,
    /// The contact lifted normally.
    Ended,
    /// The system cancelled the contact (incoming call, gesture takeover).
    Cancelled,
}

impl ContactPhase {
    /// One-letter code used in diagnostic log lines.
    pub fn code(self) -> char {
        match self {
            ContactPhase::Began => 'B',
            ContactPhase::Moved => 'M',
            ContactPhase::Stationary => 'S',
            ContactPhase::Ended => 'E',
            ContactPhase::Cancelled => 'C',
        }
    }

    /// Whether this phase terminates the contact.
    pub fn is_terminal(self) -> bool {
        matches!(self, ContactPhase::Ended | ContactPhase::Cancelled)
    }
}

/// Snapshot of one contact as carried by a [`PointerEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub phase: ContactPhase,
    /// Position in overlay coordinates, in pixels.
    pub position: Point,
    /// Reported contact radius in pixels, or `0.0` when the platform
    /// cannot measure one.
    pub radius: f64,
}

/// One input event, carrying every contact that changed in it.
#[derive(Debug, Clone, Default)]
pub struct PointerEvent {
    pub contacts: Vec<Contact>,
}

impl PointerEvent {
    /// Convenience constructor for single-contact events.
    pub fn single(contact: Contact) -> Self {
        Self {
            contacts: vec![contact],
        }
    }
}
