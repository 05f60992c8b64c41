//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not bad
//! input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading from or writing to the interactive console failed.
    #[error("Console error: {reason}")]
    ConsoleError { reason: String },

    /// Lock poisoned in a shared in-memory adapter.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// Refusing to overwrite an existing file.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// Nothing to operate on.
    #[error("Nothing found at {path}")]
    NotFound { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ConsoleError { .. } => vec![
                "Standard input or output was closed".into(),
                "Run the command from an interactive terminal or pipe a script into it".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("The file '{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
            ],
            Self::NotFound { path } => vec![
                format!("Nothing exists at {}", path.display()),
                "List project sources: cppm src --list".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::ConsoleError { .. } => ErrorCategory::Internal,
            Self::LockPoisoned => ErrorCategory::Internal,
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
