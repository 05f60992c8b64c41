//! Module Service - header/module files inside a project layout.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ModuleName, ProjectLayout, SOURCE_EXTENSIONS, header_content, source_content},
    error::CppmResult,
};

/// Files removed by [`ModuleService::delete_module`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub module: String,
    pub removed: Vec<PathBuf>,
}

/// Creates, deletes and lists module files.
pub struct ModuleService {
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
}

impl ModuleService {
    pub fn new(filesystem: Box<dyn Filesystem>, layout: ProjectLayout) -> Self {
        Self { filesystem, layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Write `include/<name>.h` wrapped in an include guard.
    #[instrument(skip(self))]
    pub fn create_header(&self, name: &str, overwrite: bool) -> CppmResult<PathBuf> {
        let module = ModuleName::new(name)?;
        let path = self.layout.header_path(&module);
        self.write_new(&path, &header_content(&module), overwrite)?;

        info!(path = %path.display(), "Header created");
        Ok(path)
    }

    /// Write `src/<name>.cpp`, plus its header when `with_header` is set.
    ///
    /// Returns the created paths, source first.
    #[instrument(skip(self))]
    pub fn create_module(
        &self,
        name: &str,
        with_header: bool,
        overwrite: bool,
    ) -> CppmResult<Vec<PathBuf>> {
        let module = ModuleName::new(name)?;
        let source = self.layout.source_path(&module);
        if with_header && !overwrite {
            let header = self.layout.header_path(&module);
            if self.filesystem.exists(&header) {
                return Err(ApplicationError::AlreadyExists { path: header }.into());
            }
        }

        self.write_new(&source, &source_content(&module, with_header), overwrite)?;
        info!(path = %source.display(), "Module created");

        let mut created = vec![source];
        if with_header {
            created.push(self.create_header(name, overwrite)?);
        }
        Ok(created)
    }

    /// Remove the module's source and header, whichever exist.
    #[instrument(skip(self))]
    pub fn delete_module(&self, name: &str) -> CppmResult<DeleteReport> {
        let module = ModuleName::new(name)?;
        let source = self.layout.source_path(&module);
        let header = self.layout.header_path(&module);

        let mut removed = Vec::new();
        for path in [source.clone(), header] {
            if self.filesystem.remove_file(&path)? {
                debug!(path = %path.display(), "Removed");
                removed.push(path);
            }
        }

        if removed.is_empty() {
            return Err(ApplicationError::NotFound { path: source }.into());
        }

        Ok(DeleteReport {
            module: module.as_str().to_string(),
            removed,
        })
    }

    /// C++ sources and headers under the src and include dirs, relative to
    /// the project root and sorted.
    pub fn list_sources(&self) -> CppmResult<Vec<PathBuf>> {
        let root = self.layout.root();
        let mut sources = Vec::new();

        for dir in [self.layout.src_dir(), self.layout.include_dir()] {
            for file in self.filesystem.list_files(&dir)? {
                let is_source = file
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e));
                if is_source {
                    let relative = file.strip_prefix(root).unwrap_or(&file).to_path_buf();
                    sources.push(relative);
                }
            }
        }

        sources.sort();
        sources.dedup();
        Ok(sources)
    }

    fn write_new(&self, path: &std::path::Path, content: &str, overwrite: bool) -> CppmResult<()> {
        if !overwrite && self.filesystem.exists(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }
}
