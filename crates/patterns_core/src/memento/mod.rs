//! State capture/restore collaboration.
//!
//! # Responsibility
//! - Let an `Originator` snapshot its state into an immutable `Memento`.
//! - Let a `Caretaker` hold a snapshot without inspecting it.
//!
//! # Invariants
//! - Only `Originator` constructs `Memento` values.
//! - A `Memento` never changes after construction.
//! - `Caretaker` is single-slot and never reads captured state.

pub mod caretaker;
pub mod originator;
pub mod snapshot;
