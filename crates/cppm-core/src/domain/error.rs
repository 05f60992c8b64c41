// ============================================================================
// domain/error.rs - DECLARATION & MODULE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they are reported and then discarded by the session)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Interactive input errors (recovered at the prompt that produced them)
    // ========================================================================
    #[error("unrecognized declaration keyword in '{input}' (expected class, struct, function or quit)")]
    UnrecognizedDeclaration { input: String },

    #[error("invalid format '{input}': expected 'name type'")]
    MalformedField { input: String },

    #[error("'{keyword}' needs a name")]
    MissingName { keyword: &'static str },

    // ========================================================================
    // Module errors
    // ========================================================================
    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnrecognizedDeclaration { .. } => vec![
                "Start the line with class, struct or function followed by a name".into(),
                "Examples: class Point, struct Pair, function add".into(),
                "Type 'quit' to end the session".into(),
            ],
            Self::MalformedField { .. } => vec![
                "Separate the name and the type with a space".into(),
                "Example: count int".into(),
            ],
            Self::MissingName { keyword } => vec![format!("Example: {keyword} Example")],
            Self::InvalidModuleName { name, reason } => vec![
                format!("Module name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: parser, string_utils, net-client".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnrecognizedDeclaration { .. } | Self::MissingName { .. } => {
                ErrorCategory::Input
            }
            Self::MalformedField { .. } => ErrorCategory::Input,
            Self::InvalidModuleName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Interactive input that the session re-prompts for.
    Input,
    Validation,
}
