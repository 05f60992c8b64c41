//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cppm-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::CppmResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cppm_adapters::filesystem::LocalFilesystem` (production)
/// - `cppm_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Every call opens, uses and releases its own handle; nothing is held
///   between calls, so no call can leak a handle across a prompt
/// - Failures are reported as `ApplicationError::FilesystemError`
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create the file (and missing parents) if absent.
    ///
    /// Returns `true` when the file was created, `false` when it already
    /// existed. Existing content is never touched.
    fn ensure_file(&self, path: &Path) -> CppmResult<bool>;

    /// Append `text` to the file, flushing before returning.
    fn append_text(&self, path: &Path, text: &str) -> CppmResult<()>;

    /// Create or overwrite a file.
    fn write_file(&self, path: &Path, content: &str) -> CppmResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CppmResult<()>;

    /// Remove a file. Returns `false` when there was nothing to remove.
    fn remove_file(&self, path: &Path) -> CppmResult<bool>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// All files below `dir`, recursively, sorted. A missing `dir` yields
    /// an empty list.
    fn list_files(&self, dir: &Path) -> CppmResult<Vec<PathBuf>>;
}

/// A message shown to the user between prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info(m) | Self::Error(m) => m,
        }
    }
}

/// Port for line-oriented interactive input.
///
/// Implemented by:
/// - `cppm_adapters::console::StdioConsole` (stdin/stdout or any reader/writer pair)
/// - `cppm_adapters::console::ScriptedConsole` (testing)
pub trait Console {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> CppmResult<Option<String>>;

    /// Show a notice to the user.
    fn report(&mut self, notice: Notice) -> CppmResult<()>;
}
