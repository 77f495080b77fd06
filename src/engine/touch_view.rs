//! Per-marker bookkeeping record.
//!
//! One `TouchView` tracks one pooled marker slot: which contact it is bound
//! to, when that contact began, the last reported radius, and fade state.
//! Views are never destroyed; `detach` returns them to the pool for reuse.

use std::time::Instant;

use crate::input::{Contact, ContactId};
use crate::model::Point;

#[derive(Debug)]
pub struct TouchView {
    binding: Option<ContactId>,
    origin_time: Option<Instant>,
    position: Point,
    last_radius: f64,
    previous_ratio: f64,
    attached: bool,
    timer_running: bool,
    fade_started: Option<Instant>,
    last_label: String,
}

impl TouchView {
    pub fn new() -> Self {
        Self {
            binding: None,
            origin_time: None,
            position: Point::default(),
            last_radius: 0.0,
            previous_ratio: 1.0,
            attached: false,
            timer_running: false,
            fade_started: None,
            last_label: String::new(),
        }
    }

    /// Binds this view to a beginning contact and resets all per-lifetime
    /// state. Also cancels any in-flight fade when the slot is being
    /// reclaimed by the same contact id.
    pub fn begin(&mut self, contact: &Contact, now: Instant) {
        self.binding = Some(contact.id);
        self.origin_time = Some(now);
        self.position = contact.position;
        self.last_radius = contact.radius;
        self.previous_ratio = 1.0;
        self.timer_running = true;
        self.fade_started = None;
        self.last_label.clear();
    }

    /// Stops the elapsed-time label. Called when the contact ends; the
    /// label keeps its final text through the fade.
    pub fn end(&mut self) {
        self.timer_running = false;
    }

    /// Starts the fade-out clock. A second call while already fading is a
    /// no-op so repeated terminal events cannot restart the animation.
    pub fn begin_fade(&mut self, now: Instant) {
        if self.fade_started.is_none() {
            self.fade_started = Some(now);
        }
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Returns the view to the pool. Clears the binding so stale lookups
    /// by contact id cannot resolve to a recycled slot.
    pub fn detach(&mut self) {
        self.attached = false;
        self.binding = None;
        self.origin_time = None;
        self.fade_started = None;
        self.timer_running = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn binding(&self) -> Option<ContactId> {
        self.binding
    }

    pub fn origin_time(&self) -> Option<Instant> {
        self.origin_time
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn last_radius(&self) -> f64 {
        self.last_radius
    }

    pub fn set_last_radius(&mut self, radius: f64) {
        self.last_radius = radius;
    }

    pub fn previous_ratio(&self) -> f64 {
        self.previous_ratio
    }

    pub fn set_previous_ratio(&mut self, ratio: f64) {
        self.previous_ratio = ratio;
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn fade_started(&self) -> Option<Instant> {
        self.fade_started
    }

    pub fn last_label(&self) -> &str {
        &self.last_label
    }

    pub fn set_last_label(&mut self, label: &str) {
        self.last_label.clear();
        self.last_label.push_str(label);
    }
}

impl Default for TouchView {
    fn default() -> Self {
        Self::new()
    }
}
