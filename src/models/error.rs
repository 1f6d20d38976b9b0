//! Error conditions raised by network operations.

use std::error::Error;
use std::fmt;

/// An error raised by a name-based network operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The named town is not registered in the network.
    TownNotFound {
        /// Name that failed to resolve.
        name: String,
    },
    /// Removing a charging zone would leave a neighboring town without
    /// access to any zone. The removal has been rolled back.
    AccessibilityViolation {
        /// Town whose zone removal was attempted.
        removed: String,
        /// Neighbor that would have lost access.
        stranded: String,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TownNotFound { name } => {
                write!(f, "town '{name}' is not registered in the network")
            }
            Self::AccessibilityViolation { removed, stranded } => {
                write!(
                    f,
                    "removing the charging zone of '{removed}' would leave '{stranded}' without access to a zone"
                )
            }
        }
    }
}

impl Error for NetworkError {}
