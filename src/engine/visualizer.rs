//! Engine facade: enable/disable, event handling, frame ticks.
//!
//! The engine is single-threaded by contract. Platform backends call
//! [`Visualizer::handle_event`] from their input callback and
//! [`Visualizer::tick`] from a frame timer, both on the same thread the
//! engine was created on.

use std::io::Write;
use std::time::Instant;

use crate::input::{ContactPhase, PointerEvent};
use crate::model::{OverlayConfig, FADE_OUT_DURATION};
use crate::surface::{MarkerId, MarkerStyle, Surface};

use super::log::DiagnosticLog;
use super::pool::TouchViewPool;
use super::touch_view::TouchView;

pub struct Visualizer<S: Surface> {
    enabled: bool,
    config: OverlayConfig,
    pool: TouchViewPool,
    log: DiagnosticLog,
    surface: S,
}

impl<S: Surface> Visualizer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            enabled: false,
            config: OverlayConfig::default(),
            pool: TouchViewPool::new(),
            log: DiagnosticLog::new(),
            surface,
        }
    }

    /// Like [`Visualizer::new`] but routes diagnostic log lines to `sink`
    /// instead of stdout.
    pub fn with_log_sink(surface: S, sink: Box<dyn Write>) -> Self {
        Self {
            log: DiagnosticLog::with_sink(sink),
            ..Self::new(surface)
        }
    }

    /// Enables handling with the default configuration.
    pub fn start(&mut self) {
        self.start_with(OverlayConfig::default());
    }

    /// Installs `config` wholesale and enables handling. Any markers left
    /// over from a previous session are removed immediately.
    pub fn start_with(&mut self, mut config: OverlayConfig) {
        config.validate();
        self.config = config;
        self.enabled = true;
        self.flush();
    }

    /// Disables handling and removes all markers immediately, without
    /// fade animations. The native input hook stays installed.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.flush();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Call when the display layout changed and the surface was rebuilt.
    /// Live contacts are dropped; their next event is ignored until a new
    /// Began arrives.
    pub fn surface_changed(&mut self) {
        self.flush();
    }

    fn flush(&mut self) {
        let Self { pool, surface, .. } = self;
        for (id, view) in pool.views_mut() {
            if view.is_attached() {
                surface.remove(id);
                view.detach();
            }
        }
    }

    /// Handles one input event. Unknown contacts in non-Began phases are
    /// ignored; this is normal after `stop` or a surface change.
    pub fn handle_event(&mut self, event: &PointerEvent, now: Instant) {
        if !self.enabled || event.contacts.is_empty() {
            return;
        }
        let Self {
            pool,
            surface,
            config,
            log,
            ..
        } = self;
        for contact in &event.contacts {
            match contact.phase {
                ContactPhase::Began => {
                    // A re-Began during fade-out reclaims the same slot.
                    let id = match pool.find(contact.id) {
                        Some(id) => id,
                        None => pool.dequeue(),
                    };
                    if let Some(view) = pool.get_mut(id) {
                        let fresh = !view.is_attached();
                        view.begin(contact, now);
                        if fresh {
                            view.attach();
                            surface.add(id, &MarkerStyle::from_config(config), contact.position);
                        } else {
                            surface.move_to(id, contact.position);
                            surface.set_alpha(id, 1.0);
                            surface.set_scale(id, 1.0);
                            surface.set_label(id, "");
                        }
                        if config.shows_touch_radius {
                            Self::apply_radius(surface, config, id, view);
                        }
                    }
                }
                ContactPhase::Moved => {
                    if let Some(id) = pool.find(contact.id) {
                        if let Some(view) = pool.get_mut(id) {
                            view.set_position(contact.position);
                            view.set_last_radius(contact.radius);
                            surface.move_to(id, contact.position);
                            if config.shows_touch_radius {
                                Self::apply_radius(surface, config, id, view);
                            }
                        }
                    }
                }
                ContactPhase::Stationary => {
                    if let Some(id) = pool.find(contact.id) {
                        if let Some(view) = pool.get_mut(id) {
                            view.set_last_radius(contact.radius);
                            if config.shows_touch_radius {
                                Self::apply_radius(surface, config, id, view);
                            }
                        }
                    }
                }
                ContactPhase::Ended | ContactPhase::Cancelled => {
                    if let Some(id) = pool.find(contact.id) {
                        if let Some(view) = pool.get_mut(id) {
                            view.end();
                            view.begin_fade(now);
                        }
                    }
                }
            }
            if config.shows_log {
                log.record(pool, contact);
            }
        }
    }

    /// Advances per-frame state: elapsed-time labels, radius scaling, and
    /// fade-out progress. Call roughly every 16 ms while enabled.
    pub fn tick(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }
        let Self {
            pool,
            surface,
            config,
            ..
        } = self;
        for (id, view) in pool.views_mut() {
            if !view.is_attached() {
                continue;
            }
            if config.shows_timer && view.timer_running() {
                if let Some(origin) = view.origin_time() {
                    let elapsed = now.saturating_duration_since(origin).as_secs_f64();
                    let text = format!("{:.2}", elapsed);
                    if view.last_label() != text {
                        surface.set_label(id, &text);
                        view.set_last_label(&text);
                    }
                }
            }
            if config.shows_touch_radius {
                Self::apply_radius(surface, config, id, view);
            }
            if let Some(started) = view.fade_started() {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= FADE_OUT_DURATION {
                    surface.remove(id);
                    view.detach();
                } else {
                    let frac = elapsed.as_secs_f64() / FADE_OUT_DURATION.as_secs_f64();
                    surface.set_alpha(id, 1.0 - frac);
                }
            }
        }
    }

    /// Scales the marker to the last reported contact radius. Radius 0
    /// means the platform cannot measure one; the marker stays at its
    /// configured size. The scale command is only re-issued when the ratio
    /// actually changes.
    fn apply_radius(surface: &mut S, config: &OverlayConfig, id: MarkerId, view: &mut TouchView) {
        let radius = view.last_radius();
        if radius <= 0.0 {
            return;
        }
        let ratio = radius * 2.0 / config.default_size;
        if ratio != view.previous_ratio() {
            surface.set_scale(id, ratio);
            view.set_previous_ratio(ratio);
        }
    }
}
