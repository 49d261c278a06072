//! Memento and Observer behavioral patterns.
//! Both groups are independent; neither module depends on the other.

pub mod logging;
pub mod memento;
pub mod observer;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use memento::caretaker::{Caretaker, CaretakerError};
pub use memento::originator::{Originator, OriginatorId};
pub use memento::snapshot::Memento;
pub use observer::concrete::{ConcreteObserver, ConcreteSubject, StatusChange};
pub use observer::contract::{Observer, ObserverError};
pub use observer::subject::{ObserverRegistry, Subject, SubjectError};

/// Minimal health-check API for harness wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
