use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Extensions treated as C++ sources or headers when listing a project.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "h", "hpp"];

/// Where sources and headers live inside a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    src_dir: PathBuf,
    include_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            src_dir: PathBuf::from("src"),
            include_dir: PathBuf::from("include"),
        }
    }

    pub fn with_src_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.src_dir = dir.into();
        self
    }

    pub fn with_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dir = dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    pub fn include_dir(&self) -> PathBuf {
        self.root.join(&self.include_dir)
    }

    pub fn source_path(&self, module: &ModuleName) -> PathBuf {
        self.src_dir().join(format!("{}.cpp", module.as_str()))
    }

    pub fn header_path(&self, module: &ModuleName) -> PathBuf {
        self.include_dir().join(format!("{}.h", module.as_str()))
    }
}

/// A validated module/header base name (no extension, no directories).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidModuleName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("name cannot contain whitespace"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `parser` → `PARSER_H`. Characters that cannot appear in a macro name
    /// become `_`.
    pub fn include_guard(&self) -> String {
        let mut guard: String = self
            .0
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        guard.push_str("_H");
        guard
    }
}

/// Header boilerplate wrapped in an include guard.
pub fn header_content(module: &ModuleName) -> String {
    let guard = module.include_guard();
    format!("\n#ifndef {guard}\n#define {guard}\n\n// Your code here\n\n#endif // {guard}\n")
}

/// Source boilerplate; includes the module's header when it has one.
pub fn source_content(module: &ModuleName, with_header: bool) -> String {
    let include = if with_header {
        format!("{}.h", module.as_str())
    } else {
        String::new()
    };
    format!("\n#include \"{include}\"\n\n// Your code here\n")
}
