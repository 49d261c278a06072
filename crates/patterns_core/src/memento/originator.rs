//! Stateful owner that produces and consumes snapshots.
//!
//! # Responsibility
//! - Own one mutable state value.
//! - Capture it into `Memento` snapshots and restore from them.
//!
//! # Invariants
//! - `state` changes only through `set_state` or `restore`.
//! - `create_memento` has no observable side effect on the originator.
//! - `restore` accepts any memento; provenance is reported, not enforced.

use crate::memento::snapshot::Memento;
use log::{debug, warn};
use std::fmt::Display;
use uuid::Uuid;

/// Stable identity stamped onto every memento an originator creates.
pub type OriginatorId = Uuid;

/// Object whose internal state can be snapshotted and restored.
#[derive(Debug)]
pub struct Originator<S> {
    id: OriginatorId,
    state: S,
}

impl<S> Originator<S> {
    /// Creates an originator with a generated identity and initial state.
    pub fn new(state: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            state,
        }
    }

    pub fn id(&self) -> OriginatorId {
        self.id
    }

    /// Borrows the current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Replaces the current state unconditionally.
    pub fn set_state(&mut self, value: S) {
        self.state = value;
    }

    /// Returns whether `memento` was produced by this originator.
    ///
    /// Diagnostic only: `restore` does not consult it.
    pub fn owns(&self, memento: &Memento<S>) -> bool {
        memento.origin() == self.id
    }
}

impl<S: Clone> Originator<S> {
    /// Returns an owned copy of the current state.
    pub fn get_state(&self) -> S {
        self.state.clone()
    }

    /// Captures the current state into a new immutable snapshot.
    pub fn create_memento(&self) -> Memento<S> {
        debug!(
            "event=memento_create module=memento status=ok originator={}",
            self.id
        );
        Memento::new(self.id, self.state.clone())
    }

    /// Replaces the current state with the snapshot's state.
    ///
    /// # Contract
    /// - Always succeeds.
    /// - A memento from another originator is still applied; the foreign
    ///   origin is logged at `warn`.
    pub fn restore(&mut self, memento: &Memento<S>) {
        if !self.owns(memento) {
            warn!(
                "event=memento_restore module=memento status=foreign originator={} origin={}",
                self.id,
                memento.origin()
            );
        }
        self.state = memento.get_state();
        debug!(
            "event=memento_restore module=memento status=ok originator={}",
            self.id
        );
    }
}

impl<S: Display> Originator<S> {
    /// Renders the current state as a diagnostic line.
    pub fn show(&self) -> String {
        let line = format!("state: {}", self.state);
        debug!(
            "event=originator_show module=memento originator={} {}",
            self.id, line
        );
        line
    }
}

#[cfg(test)]
mod tests {
    use super::Originator;

    #[test]
    fn create_memento_does_not_touch_state() {
        let originator = Originator::new("init".to_string());
        let memento = originator.create_memento();

        assert_eq!(originator.state(), "init");
        assert_eq!(memento.state(), "init");
        assert_eq!(memento.origin(), originator.id());
    }

    #[test]
    fn restore_returns_to_captured_state() {
        let mut originator = Originator::new(1_u32);
        originator.set_state(2);
        let memento = originator.create_memento();
        originator.set_state(3);
        originator.set_state(4);

        originator.restore(&memento);
        assert_eq!(originator.get_state(), 2);
    }

    #[test]
    fn restore_applies_foreign_memento() {
        let source = Originator::new("from-source");
        let mut target = Originator::new("target");
        let memento = source.create_memento();

        assert!(!target.owns(&memento));
        target.restore(&memento);
        assert_eq!(*target.state(), "from-source");
    }

    #[test]
    fn originators_get_distinct_ids() {
        let first = Originator::new(0);
        let second = Originator::new(0);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn show_renders_current_state() {
        let mut originator = Originator::new("init");
        assert_eq!(originator.show(), "state: init");
        originator.set_state("begin");
        assert_eq!(originator.show(), "state: begin");
    }
}
