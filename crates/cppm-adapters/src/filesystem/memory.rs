//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use cppm_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CppmResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and read
/// results back through another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.into();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Make every write to `path` fail (testing helper).
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_all(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn write_guard(&self) -> CppmResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn denied(path: &Path) -> cppm_core::error::CppmError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Permission denied".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn ensure_file(&self, path: &Path) -> CppmResult<bool> {
        let mut inner = self.write_guard()?;
        if inner.files.contains_key(path) {
            return Ok(false);
        }
        if inner.read_only.contains(path) {
            return Err(denied(path));
        }
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), String::new());
        Ok(true)
    }

    fn append_text(&self, path: &Path, text: &str) -> CppmResult<()> {
        let mut inner = self.write_guard()?;
        if inner.read_only.contains(path) {
            return Err(denied(path));
        }
        match inner.files.get_mut(path) {
            Some(content) => {
                content.push_str(text);
                Ok(())
            }
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> CppmResult<()> {
        let mut inner = self.write_guard()?;
        if inner.read_only.contains(path) {
            return Err(denied(path));
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> CppmResult<()> {
        let mut inner = self.write_guard()?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> CppmResult<bool> {
        let mut inner = self.write_guard()?;
        Ok(inner.files.remove(path).is_some())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_files(&self, dir: &Path) -> CppmResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(dir) && p.as_path() != dir)
            .cloned()
            .collect())
    }
}
