//! Single-slot memento holder.

use crate::memento::snapshot::Memento;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Holds at most one memento and never looks inside it.
#[derive(Debug)]
pub struct Caretaker<S> {
    memento: Option<Memento<S>>,
}

impl<S> Default for Caretaker<S> {
    fn default() -> Self {
        Self { memento: None }
    }
}

impl<S> Caretaker<S> {
    /// Creates an empty caretaker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the held memento, or `None` when nothing was stored yet.
    pub fn get_memento(&self) -> Option<&Memento<S>> {
        self.memento.as_ref()
    }

    /// Stores `memento`, dropping any previously held one.
    pub fn set_memento(&mut self, memento: Memento<S>) {
        self.memento = Some(memento);
    }

    /// Hands the held memento back and leaves the slot empty.
    pub fn take_memento(&mut self) -> Option<Memento<S>> {
        self.memento.take()
    }

    /// Returns the held memento or `CaretakerError::Empty`.
    pub fn require_memento(&self) -> Result<&Memento<S>, CaretakerError> {
        self.memento.as_ref().ok_or(CaretakerError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.memento.is_none()
    }
}

/// Caretaker access errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretakerError {
    Empty,
}

impl Display for CaretakerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "caretaker holds no memento"),
        }
    }
}

impl Error for CaretakerError {}
