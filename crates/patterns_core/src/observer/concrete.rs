//! Status-carrying subject and the observer that mirrors it.

use crate::observer::contract::{Observer, ObserverError};
use crate::observer::subject::{ObserverRegistry, Subject};
use log::info;
use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Display, Formatter};
use std::rc::{Rc, Weak};

/// Subject with one observable `status` value.
///
/// `status` is unset until the first `set_status`.
pub struct ConcreteSubject<S> {
    registry: ObserverRegistry,
    status: RefCell<Option<S>>,
}

impl<S> ConcreteSubject<S> {
    /// Creates a shared subject with no observers and no status.
    ///
    /// Returned as `Rc` because observers keep a `Weak` back-reference.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            registry: ObserverRegistry::new(),
            status: RefCell::new(None),
        })
    }

    /// Replaces the status. Observers are not notified; call `notify()`.
    pub fn set_status(&self, value: S) {
        *self.status.borrow_mut() = Some(value);
    }
}

impl<S: Clone> ConcreteSubject<S> {
    pub fn get_status(&self) -> Option<S> {
        self.status.borrow().clone()
    }
}

impl<S> Subject for ConcreteSubject<S> {
    fn registry(&self) -> &ObserverRegistry {
        &self.registry
    }
}

impl<S: Debug> Debug for ConcreteSubject<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcreteSubject")
            .field("observers", &self.registry.len())
            .field("status", &self.status.borrow())
            .finish()
    }
}

/// Observer that caches the last status pulled from its subject.
pub struct ConcreteObserver<S> {
    subject: Weak<ConcreteSubject<S>>,
    name: String,
    status: RefCell<Option<S>>,
    update_count: Cell<usize>,
}

impl<S> ConcreteObserver<S> {
    /// Binds a new observer to `subject` for its whole lifetime.
    ///
    /// Does not attach it; the caller decides when to register.
    pub fn new(subject: &Rc<ConcreteSubject<S>>, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            subject: Rc::downgrade(subject),
            name: name.into(),
            status: RefCell::new(None),
            update_count: Cell::new(0),
        })
    }

    /// Number of updates received so far.
    pub fn update_count(&self) -> usize {
        self.update_count.get()
    }
}

impl<S: Clone> ConcreteObserver<S> {
    /// Last status pulled from the subject; `None` before the first update.
    pub fn status(&self) -> Option<S> {
        self.status.borrow().clone()
    }

    /// The change recorded by the most recent update, if any.
    pub fn last_change(&self) -> Option<StatusChange<S>> {
        if self.update_count() == 0 {
            return None;
        }
        Some(StatusChange {
            observer: self.name.clone(),
            status: self.status(),
        })
    }
}

impl<S: Clone> Observer for ConcreteObserver<S> {
    fn update(&self) -> Result<(), ObserverError> {
        let subject = self
            .subject
            .upgrade()
            .ok_or_else(|| ObserverError::SubjectDropped {
                observer: self.name.clone(),
            })?;
        *self.status.borrow_mut() = subject.get_status();
        self.update_count.set(self.update_count.get() + 1);
        info!(
            "event=observer_update module=observer status=ok name={} updates={}",
            self.name,
            self.update_count.get()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One observer's view after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange<S> {
    pub observer: String,
    pub status: Option<S>,
}

impl<S: Display> Display for StatusChange<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.status {
            Some(status) => write!(
                f,
                "the observer: {} status change to {}",
                self.observer, status
            ),
            None => write!(f, "the observer: {} status change to None", self.observer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConcreteObserver, ConcreteSubject, StatusChange};
    use crate::observer::contract::{Observer, ObserverError};
    use crate::observer::subject::Subject;

    #[test]
    fn observer_starts_without_status() {
        let subject = ConcreteSubject::<String>::new();
        let observer = ConcreteObserver::new(&subject, "X");

        assert_eq!(observer.status(), None);
        assert_eq!(observer.update_count(), 0);
        assert!(observer.last_change().is_none());
    }

    #[test]
    fn set_status_does_not_notify() {
        let subject = ConcreteSubject::new();
        let observer = ConcreteObserver::new(&subject, "X");
        subject.attach(&observer);

        subject.set_status("A");
        assert_eq!(observer.status(), None);

        subject.notify().expect("notify");
        assert_eq!(observer.status(), Some("A"));
    }

    #[test]
    fn update_before_any_status_caches_none() {
        let subject = ConcreteSubject::<u8>::new();
        let observer = ConcreteObserver::new(&subject, "early");
        subject.attach(&observer);

        subject.notify().expect("notify");
        assert_eq!(observer.status(), None);
        assert_eq!(
            observer.last_change(),
            Some(StatusChange {
                observer: "early".to_string(),
                status: None,
            })
        );
    }

    #[test]
    fn update_fails_after_subject_is_dropped() {
        let subject = ConcreteSubject::<u8>::new();
        let observer = ConcreteObserver::new(&subject, "orphan");
        drop(subject);

        let err = observer.update().expect_err("subject is gone");
        assert_eq!(
            err,
            ObserverError::SubjectDropped {
                observer: "orphan".to_string()
            }
        );
    }

    #[test]
    fn status_change_renders_report_line() {
        let change = StatusChange {
            observer: "Y".to_string(),
            status: Some("B"),
        };
        assert_eq!(change.to_string(), "the observer: Y status change to B");
    }
}
