//! Observer registry and subject contract.
//!
//! # Invariants
//! - Entries are kept in attach order; duplicates are not collapsed.
//! - `detach` removes exactly one entry, the first match by identity.
//! - `notify` iterates a snapshot taken on entry, so attach/detach from
//!   inside `update()` applies to the next call.
//! - The first failing `update()` aborts the remaining notifications.
//! - Entries whose observer was dropped are pruned on `attach` and `notify`.

use crate::observer::contract::{Observer, ObserverError};
use log::debug;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};

/// Ordered, non-owning observer registry.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RefCell<Vec<Weak<dyn Observer>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer` to the registry.
    ///
    /// Attaching the same observer twice registers it twice.
    pub fn attach<O: Observer + 'static>(&self, observer: &Rc<O>) {
        let erased: Rc<dyn Observer> = observer.clone();
        self.attach_dyn(&erased);
    }

    /// Type-erased form of `attach`, for mixed observer collections.
    pub fn attach_dyn(&self, observer: &Rc<dyn Observer>) {
        self.prune();
        self.observers.borrow_mut().push(Rc::downgrade(observer));
        debug!(
            "event=observer_attach module=observer status=ok name={} registered={}",
            observer.name(),
            self.len()
        );
    }

    /// Removes the first registration of `observer`.
    ///
    /// # Errors
    /// - `SubjectError::ObserverNotFound` when `observer` is not registered.
    pub fn detach<O: Observer + 'static>(&self, observer: &Rc<O>) -> Result<(), SubjectError> {
        let erased: Rc<dyn Observer> = observer.clone();
        self.detach_dyn(&erased)
    }

    /// Type-erased form of `detach`; identity is the observer's allocation.
    pub fn detach_dyn(&self, observer: &Rc<dyn Observer>) -> Result<(), SubjectError> {
        let target = Rc::downgrade(observer);
        let mut observers = self.observers.borrow_mut();
        let Some(position) = observers
            .iter()
            .position(|entry| Weak::ptr_eq(entry, &target))
        else {
            return Err(SubjectError::ObserverNotFound {
                observer: observer.name().to_string(),
            });
        };
        observers.remove(position);
        debug!(
            "event=observer_detach module=observer status=ok name={} registered={}",
            observer.name(),
            observers.len()
        );
        Ok(())
    }

    /// Calls `update()` on every live registration, in attach order.
    ///
    /// Returns the number of updates delivered. Registrations whose observer
    /// has been dropped are removed before iterating; ones dropped during
    /// the iteration are skipped.
    ///
    /// # Errors
    /// - `SubjectError::UpdateFailed` for the first observer whose update
    ///   fails; observers after it are not notified.
    pub fn notify(&self) -> Result<usize, SubjectError> {
        self.prune();
        let snapshot = self.observers.borrow().clone();
        let mut delivered = 0;
        for (index, entry) in snapshot.iter().enumerate() {
            let Some(observer) = entry.upgrade() else {
                debug!("event=observer_skip module=observer status=dropped index={index}");
                continue;
            };
            observer
                .update()
                .map_err(|source| SubjectError::UpdateFailed {
                    index,
                    observer: observer.name().to_string(),
                    source,
                })?;
            delivered += 1;
        }
        debug!("event=subject_notify module=observer status=ok delivered={delivered}");
        Ok(delivered)
    }

    /// Number of registrations. May include observers dropped since the
    /// last `attach` or `notify`.
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    fn prune(&self) {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|entry| entry.strong_count() > 0);
        let pruned = before - observers.len();
        if pruned > 0 {
            debug!("event=observer_prune module=observer status=ok pruned={pruned}");
        }
    }
}

/// An object that maintains observers and broadcasts change notifications.
///
/// Implementors supply the registry; attach/detach/notify come for free.
pub trait Subject {
    fn registry(&self) -> &ObserverRegistry;

    fn attach<O: Observer + 'static>(&self, observer: &Rc<O>) {
        self.registry().attach(observer);
    }

    fn attach_dyn(&self, observer: &Rc<dyn Observer>) {
        self.registry().attach_dyn(observer);
    }

    fn detach<O: Observer + 'static>(&self, observer: &Rc<O>) -> Result<(), SubjectError> {
        self.registry().detach(observer)
    }

    fn detach_dyn(&self, observer: &Rc<dyn Observer>) -> Result<(), SubjectError> {
        self.registry().detach_dyn(observer)
    }

    fn notify(&self) -> Result<usize, SubjectError> {
        self.registry().notify()
    }
}

/// Subject registry and broadcast errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    ObserverNotFound {
        observer: String,
    },
    UpdateFailed {
        index: usize,
        observer: String,
        source: ObserverError,
    },
}

impl Display for SubjectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ObserverNotFound { observer } => {
                write!(f, "observer not registered: {observer}")
            }
            Self::UpdateFailed {
                index,
                observer,
                source,
            } => write!(
                f,
                "notify aborted at observer #{index} (`{observer}`): {source}"
            ),
        }
    }
}

impl Error for SubjectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ObserverNotFound { .. } => None,
            Self::UpdateFailed { source, .. } => Some(source),
        }
    }
}
