//! Immutable state snapshot.
//!
//! # Invariants
//! - Fields are private and set once by `Memento::new`, which is crate-only.
//! - No mutator exists; clones are independent values.

use crate::memento::originator::OriginatorId;

/// Captured state of one `Originator` at one point in time.
///
/// Opaque to everyone except originators: callers may hold, clone and hand
/// it back, but only `Originator::create_memento` can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento<S> {
    origin: OriginatorId,
    state: S,
}

impl<S> Memento<S> {
    pub(crate) fn new(origin: OriginatorId, state: S) -> Self {
        Self { origin, state }
    }

    /// Read-only view of the captured state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Identity of the originator that produced this snapshot.
    pub fn origin(&self) -> OriginatorId {
        self.origin
    }
}

impl<S: Clone> Memento<S> {
    /// Returns an owned copy of the captured state.
    pub fn get_state(&self) -> S {
        self.state.clone()
    }
}
