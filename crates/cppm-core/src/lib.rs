//! cppm Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cppm C++
//! project manager, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             cppm-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (EditSession, ModuleService)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, Console)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cppm-adapters (Infrastructure)      │
//! │ (LocalFilesystem, StdioConsole, etc)    │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): declarations, header parsing, rendering
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use cppm_core::application::{Console, EditSession, Filesystem};
//!
//! fn edit(fs: &dyn Filesystem, console: &mut dyn Console) {
//!     let summary = EditSession::new(fs, console)
//!         .run(Path::new("src/main.cpp"))
//!         .unwrap();
//!     println!("{} declarations added", summary.appended);
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EditSession, ModuleService, SessionState, SessionSummary,
        ports::{Console, Filesystem, Notice},
    };
    pub use crate::domain::{
        DeclarationHeader, Field, FunctionDeclaration, ModuleName, ProjectLayout, RenderStyle,
        TypeDeclaration, TypeKind,
    };
    pub use crate::error::{CppmError, CppmResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
