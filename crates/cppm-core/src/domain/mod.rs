// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for cppm.
//!
//! This module contains pure logic with no I/O: the declaration model, the
//! parsers that turn prompt input into it, the renderers that turn it into
//! C++ text, and the module/header templates.
//!
//! - **No I/O**: filesystem and terminal access go through the ports in
//!   `crate::application::ports`
//! - **No external crates**: only std, `thiserror` and `serde` derives
pub mod declaration;
pub mod error;
pub mod module;
pub mod render;

pub use declaration::{DeclarationHeader, Field, FunctionDeclaration, TypeDeclaration, TypeKind};
pub use error::{DomainError, ErrorCategory};
pub use module::{ModuleName, ProjectLayout, SOURCE_EXTENSIONS, header_content, source_content};
pub use render::{RenderStyle, render_function, render_parameters, render_type};
