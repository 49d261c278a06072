//! One-to-many change notification.
//!
//! # Responsibility
//! - Keep an ordered registry of observers per subject.
//! - Broadcast pull-style notifications: observers query the subject.
//!
//! # Invariants
//! - Registration order is notification order.
//! - Subjects hold `Weak` references only; callers own their observers.
//! - Changing subject state never notifies implicitly.
//! - Single-threaded: instances are `!Send` and need no locking.

pub mod concrete;
pub mod contract;
pub mod subject;
