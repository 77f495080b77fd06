//! The rendering collaborator the engine drives.
//!
//! The engine never draws. It issues marker commands through the
//! [`Surface`] trait and the platform backends decide how those commands
//! become pixels. [`MarkerStore`] is the retained implementation both
//! backends render from each frame; tests drive it directly.

use crate::model::{Color, MarkerShape, OverlayConfig, Point};

/// Handle to one marker slot on a surface.
///
/// Ids are pool indices: they stay valid across detach/reuse cycles and a
/// reused slot keeps its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

/// Visual style of one marker, resolved from the active configuration at
/// the moment the marker is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    pub shape: MarkerShape,
    /// Base diameter in pixels, before radius scaling.
    pub size: f64,
    pub shows_label: bool,
}

impl MarkerStyle {
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            color: config.color,
            shape: config.shape,
            size: config.default_size,
            shows_label: config.shows_timer,
        }
    }
}

/// Commands the engine issues to whoever renders the overlay.
///
/// Implementations must tolerate ids they do not know about; the engine can
/// emit a remove for a marker a freshly swapped surface never saw.
pub trait Surface {
    fn add(&mut self, id: MarkerId, style: &MarkerStyle, at: Point);
    fn remove(&mut self, id: MarkerId);
    fn move_to(&mut self, id: MarkerId, to: Point);
    fn set_scale(&mut self, id: MarkerId, ratio: f64);
    fn set_alpha(&mut self, id: MarkerId, alpha: f64);
    fn set_label(&mut self, id: MarkerId, text: &str);
}

/// One retained marker as held by a [`MarkerStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub style: MarkerStyle,
    pub position: Point,
    pub scale: f64,
    pub alpha: f64,
    pub label: String,
}

/// Retained marker state keyed by [`MarkerId`].
///
/// Platform renderers iterate [`MarkerStore::markers`] once per frame and
/// draw whatever is present.
#[derive(Debug, Default)]
pub struct MarkerStore {
    slots: Vec<Option<Marker>>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Live markers with their ids, in slot order.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &Marker)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|m| (MarkerId(i), m)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }
}

impl Surface for MarkerStore {
    fn add(&mut self, id: MarkerId, style: &MarkerStyle, at: Point) {
        if id.0 >= self.slots.len() {
            self.slots.resize(id.0 + 1, None);
        }
        self.slots[id.0] = Some(Marker {
            style: *style,
            position: at,
            scale: 1.0,
            alpha: 1.0,
            label: String::new(),
        });
    }

    fn remove(&mut self, id: MarkerId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = None;
        }
    }

    fn move_to(&mut self, id: MarkerId, to: Point) {
        if let Some(marker) = self.slot_mut(id) {
            marker.position = to;
        }
    }

    fn set_scale(&mut self, id: MarkerId, ratio: f64) {
        if let Some(marker) = self.slot_mut(id) {
            marker.scale = ratio;
        }
    }

    fn set_alpha(&mut self, id: MarkerId, alpha: f64) {
        if let Some(marker) = self.slot_mut(id) {
            marker.alpha = alpha;
        }
    }

    fn set_label(&mut self, id: MarkerId, text: &str) {
        if let Some(marker) = self.slot_mut(id) {
            if marker.label != text {
                marker.label.clear();
                marker.label.push_str(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> MarkerStyle {
        MarkerStyle::from_config(&OverlayConfig::default())
    }

    #[test]
    fn add_then_get() {
        let mut store = MarkerStore::new();
        store.add(MarkerId(0), &style(), Point::new(5.0, 6.0));
        let marker = store.get(MarkerId(0)).unwrap();
        assert_eq!(marker.position, Point::new(5.0, 6.0));
        assert_eq!(marker.scale, 1.0);
        assert_eq!(marker.alpha, 1.0);
        assert!(marker.label.is_empty());
    }

    #[test]
    fn remove_clears_slot() {
        let mut store = MarkerStore::new();
        store.add(MarkerId(0), &style(), Point::default());
        store.remove(MarkerId(0));
        assert!(store.get(MarkerId(0)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn commands_on_unknown_ids_are_ignored() {
        let mut store = MarkerStore::new();
        store.remove(MarkerId(3));
        store.move_to(MarkerId(3), Point::new(1.0, 1.0));
        store.set_scale(MarkerId(3), 2.0);
        store.set_alpha(MarkerId(3), 0.5);
        store.set_label(MarkerId(3), "x");
        assert!(store.is_empty());
    }

    #[test]
    fn markers_iterates_live_slots_in_order() {
        let mut store = MarkerStore::new();
        store.add(MarkerId(0), &style(), Point::new(1.0, 0.0));
        store.add(MarkerId(2), &style(), Point::new(2.0, 0.0));
        store.remove(MarkerId(0));
        let ids: Vec<MarkerId> = store.markers().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![MarkerId(2)]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reused_slot_gets_fresh_state() {
        let mut store = MarkerStore::new();
        store.add(MarkerId(0), &style(), Point::default());
        store.set_alpha(MarkerId(0), 0.3);
        store.set_scale(MarkerId(0), 1.7);
        store.remove(MarkerId(0));
        store.add(MarkerId(0), &style(), Point::new(9.0, 9.0));
        let marker = store.get(MarkerId(0)).unwrap();
        assert_eq!(marker.alpha, 1.0);
        assert_eq!(marker.scale, 1.0);
        assert_eq!(marker.position, Point::new(9.0, 9.0));
    }
}
