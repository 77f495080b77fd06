//! Reusable view pool.
//!
//! The pool only ever grows; its size is the peak number of simultaneous
//! contacts seen so far. `dequeue` prefers a detached slot and only pushes
//! a new view when every existing one is attached. Slot indices double as
//! [`MarkerId`]s, so a reused slot keeps its marker id.

use crate::input::ContactId;
use crate::surface::MarkerId;

use super::touch_view::TouchView;

#[derive(Debug, Default)]
pub struct TouchViewPool {
    views: Vec<TouchView>,
}

impl TouchViewPool {
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Returns the first detached slot, growing the pool only when none
    /// is free.
    pub fn dequeue(&mut self) -> MarkerId {
        if let Some(index) = self.views.iter().position(|v| !v.is_attached()) {
            return MarkerId(index);
        }
        self.views.push(TouchView::new());
        MarkerId(self.views.len() - 1)
    }

    /// Finds the attached slot bound to `id`, if any.
    pub fn find(&self, id: ContactId) -> Option<MarkerId> {
        self.views
            .iter()
            .position(|v| v.is_attached() && v.binding() == Some(id))
            .map(MarkerId)
    }

    pub fn get(&self, id: MarkerId) -> Option<&TouchView> {
        self.views.get(id.0)
    }

    pub fn get_mut(&mut self, id: MarkerId) -> Option<&mut TouchView> {
        self.views.get_mut(id.0)
    }

    pub fn views(&self) -> impl Iterator<Item = (MarkerId, &TouchView)> {
        self.views.iter().enumerate().map(|(i, v)| (MarkerId(i), v))
    }

    pub fn views_mut(&mut self) -> impl Iterator<Item = (MarkerId, &mut TouchView)> {
        self.views
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (MarkerId(i), v))
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn attached_count(&self) -> usize {
        self.views.iter().filter(|v| v.is_attached()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Contact, ContactPhase};
    use crate::model::Point;
    use std::time::Instant;

    fn attach(pool: &mut TouchViewPool, contact_id: u64) -> MarkerId {
        let id = pool.dequeue();
        let contact = Contact {
            id: ContactId(contact_id),
            phase: ContactPhase::Began,
            position: Point::default(),
            radius: 0.0,
        };
        let view = pool.get_mut(id).unwrap();
        view.begin(&contact, Instant::now());
        view.attach();
        id
    }

    #[test]
    fn dequeue_grows_only_when_all_attached() {
        let mut pool = TouchViewPool::new();
        let a = attach(&mut pool, 1);
        let b = attach(&mut pool, 2);
        assert_ne!(a, b);
        assert_eq!(pool.len(), 2);

        pool.get_mut(a).unwrap().detach();
        let c = attach(&mut pool, 3);
        assert_eq!(c, a);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn find_matches_attached_binding_only() {
        let mut pool = TouchViewPool::new();
        let a = attach(&mut pool, 1);
        assert_eq!(pool.find(ContactId(1)), Some(a));
        assert_eq!(pool.find(ContactId(9)), None);

        pool.get_mut(a).unwrap().detach();
        assert_eq!(pool.find(ContactId(1)), None);
    }

    #[test]
    fn attached_count_tracks_detach() {
        let mut pool = TouchViewPool::new();
        let a = attach(&mut pool, 1);
        attach(&mut pool, 2);
        assert_eq!(pool.attached_count(), 2);
        pool.get_mut(a).unwrap().detach();
        assert_eq!(pool.attached_count(), 1);
        assert_eq!(pool.len(), 2);
    }
}
