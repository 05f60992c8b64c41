//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "edit a source file" or "create a module".

pub mod edit_session;
pub mod module_service;

pub use edit_session::{DEFAULT_SEED, EditSession, SessionState, SessionSummary};
pub use module_service::{DeleteReport, ModuleService};
