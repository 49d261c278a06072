//! Observer capability contract.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Anything that reacts to a subject's notification.
///
/// Notifications carry no payload. Implementors pull whatever they need
/// from the subject reference they were built with.
pub trait Observer {
    /// Called once per `notify()` for every registration of this observer.
    fn update(&self) -> Result<(), ObserverError>;

    /// Display name used in diagnostics. Defaults to the implementing type.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Observer update failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// The subject this observer watches no longer exists.
    SubjectDropped { observer: String },
    /// Implementor-defined failure.
    Failed(String),
}

impl Display for ObserverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubjectDropped { observer } => {
                write!(f, "observer `{observer}` outlived its subject")
            }
            Self::Failed(message) => write!(f, "observer update failed: {message}"),
        }
    }
}

impl Error for ObserverError {}

#[cfg(test)]
mod tests {
    use super::{Observer, ObserverError};

    struct Unnamed;

    impl Observer for Unnamed {
        fn update(&self) -> Result<(), ObserverError> {
            Ok(())
        }
    }

    #[test]
    fn default_name_identifies_the_implementing_type() {
        let name = Unnamed.name();
        assert!(name.ends_with("Unnamed"), "unexpected name: {name}");
    }
}
