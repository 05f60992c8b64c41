//! Infrastructure adapters for cppm.
//!
//! This crate implements the ports defined in `cppm-core::application::ports`.
//! It contains all filesystem and terminal I/O.

pub mod console;
pub mod filesystem;

// Re-export commonly used adapters
pub use console::{ScriptedConsole, StdioConsole};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
