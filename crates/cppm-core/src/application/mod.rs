//! Application layer for cppm.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (EditSession, ModuleService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Parsing and rendering rules live in `crate::domain`; services only
//! sequence prompts, renderers and port calls.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_SEED, DeleteReport, EditSession, ModuleService, SessionState, SessionSummary,
    edit_session::prompts,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Console, Filesystem, Notice};

pub use error::ApplicationError;
