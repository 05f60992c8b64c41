//! Unified error handling for cppm core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for cppm core operations.
#[derive(Debug, Error, Clone)]
pub enum CppmError {
    /// Errors from the domain layer (bad input, invalid names).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, console).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl CppmError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Input => ErrorCategory::Input,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for errors the edit session reports and then carries on from:
    /// bad input and failed file writes. Console and lock failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Input)
            || matches!(self, Self::Application(ApplicationError::FilesystemError { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type CppmResult<T> = Result<T, CppmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn input_errors_are_recoverable() {
        let err: CppmError = DomainError::MalformedField { input: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.is_recoverable());
    }

    #[test]
    fn filesystem_errors_are_recoverable_but_console_and_lock_errors_are_not() {
        let fs: CppmError = ApplicationError::FilesystemError {
            path: PathBuf::from("a.cpp"),
            reason: "denied".into(),
        }
        .into();
        let console: CppmError = ApplicationError::ConsoleError {
            reason: "closed".into(),
        }
        .into();
        assert!(fs.is_recoverable());
        assert!(!console.is_recoverable());
        assert!(!CppmError::from(ApplicationError::LockPoisoned).is_recoverable());
    }

    #[test]
    fn domain_message_is_not_wrapped() {
        let err: CppmError = DomainError::MissingName { keyword: "class" }.into();
        assert_eq!(err.to_string(), "'class' needs a name");
    }
}
