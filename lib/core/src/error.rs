//! Error handling foundation for hashnav.
//!
//! This module provides the `Result` type alias using rootcause, plus the
//! error enums for the two places routing can actually fail: building a
//! route table and talking to the history backend. An unmatched location is
//! not an error; it resolves to no view.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer adds its own context via `.context()` as errors propagate.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from route table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The route path is not an exact, absolute path.
    InvalidPath { path: String, reason: String },
    /// Two routes share the same path.
    DuplicatePath { path: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid route path '{path}': {reason}")
            }
            Self::DuplicatePath { path } => write!(f, "duplicate route path '{path}'"),
        }
    }
}

impl std::error::Error for RouteError {}

/// Errors from the history backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// The backend could not be reached (no window, no history object).
    Unavailable { details: String },
    /// Writing the new fragment failed.
    UpdateFailed { fragment: String, details: String },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { details } => write!(f, "history unavailable: {details}"),
            Self::UpdateFailed { fragment, details } => {
                write!(f, "failed to update history to '{fragment}': {details}")
            }
        }
    }
}

impl std::error::Error for HistoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_works() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }

    #[test]
    fn route_error_display() {
        let err = RouteError::InvalidPath {
            path: "about".to_string(),
            reason: "must start with '/'".to_string(),
        };
        assert!(err.to_string().contains("invalid route path 'about'"));

        let err = RouteError::DuplicatePath {
            path: "/".to_string(),
        };
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn history_error_display() {
        let err = HistoryError::UpdateFailed {
            fragment: "#/about".to_string(),
            details: "SecurityError".to_string(),
        };
        assert!(err.to_string().contains("#/about"));
        assert!(err.to_string().contains("SecurityError"));
    }
}
