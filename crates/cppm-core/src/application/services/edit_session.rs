//! Edit Session - the interactive declaration loop.
//!
//! One session is bound to one target file:
//! 1. Ensure the file exists, seeding it when newly created
//! 2. Read a declaration header (`class X`, `struct X`, `function f`, `quit`)
//! 3. Prompt for the declaration's details and render it
//! 4. Append the rendered text and go back to 2
//!
//! The loop is an explicit state machine so it can be driven by a scripted
//! [`Console`] in tests instead of a live terminal.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Console, Filesystem, Notice},
    domain::{
        DeclarationHeader, Field, FunctionDeclaration, RenderStyle, TypeDeclaration, TypeKind,
        render_function, render_type,
    },
    error::{CppmError, CppmResult},
};

/// Seed written to a target file the session had to create.
pub const DEFAULT_SEED: &str = "#include <iostream>\n\n";

/// Prompt texts, exactly as shown to the user.
pub mod prompts {
    pub const DECLARATION: &str = "Enter class/struct/function [name] (or 'quit' to exit): ";
    pub const PARAMETER: &str = "Enter parameter (name type) or press Enter to finish: ";
    pub const ATTRIBUTE: &str = "Enter attribute (name type) or press Enter to finish: ";
    pub const METHOD: &str = "Add method (name) or press Enter to finish: ";
    pub const DESCRIPTION: &str = "Enter description: ";
    pub const RETURN_TYPE: &str = "Enter return type: ";
}

/// Where the session loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    EmittingFunction,
    EmittingType,
    Erroring,
    /// Terminal; reached through `quit` or end of input.
    Closed,
}

/// What a finished session did to its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// The target did not exist and was created with the seed.
    pub created: bool,
    /// Declarations written to the target.
    pub appended: usize,
    /// Declarations lost to a failed append.
    pub failed: usize,
    /// Declaration lines rejected (unknown keyword or missing name).
    pub rejected: usize,
}

/// Interactive editing loop over one target file.
pub struct EditSession<'a> {
    filesystem: &'a dyn Filesystem,
    console: &'a mut dyn Console,
    style: RenderStyle,
    seed: String,
    state: SessionState,
    summary: SessionSummary,
}

impl<'a> EditSession<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, console: &'a mut dyn Console) -> Self {
        Self {
            filesystem,
            console,
            style: RenderStyle::default(),
            seed: DEFAULT_SEED.to_string(),
            state: SessionState::AwaitingInput,
            summary: SessionSummary::default(),
        }
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the seed written into newly created targets.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session until `quit` or end of input.
    ///
    /// Filesystem failures, including failing to create the target, are
    /// reported and counted in [`SessionSummary::failed`]; only errors that
    /// are not [`CppmError::is_recoverable`] (a broken console) end the
    /// session with an error.
    #[instrument(skip_all, fields(target = %target.display()))]
    pub fn run(mut self, target: &Path) -> CppmResult<SessionSummary> {
        self.open(target)?;

        while self.state != SessionState::Closed {
            self.step(target)?;
        }

        info!(
            appended = self.summary.appended,
            failed = self.summary.failed,
            "Edit session closed"
        );
        Ok(self.summary)
    }

    fn open(&mut self, target: &Path) -> CppmResult<()> {
        let created = match self.filesystem.ensure_file(target) {
            Ok(created) => created,
            Err(e) => {
                self.summary.failed += 1;
                return self.recover(e, "Could not create target");
            }
        };

        if created && !self.seed.is_empty() {
            if let Err(e) = self.filesystem.append_text(target, &self.seed) {
                // Leave no unseeded file behind.
                if let Err(cleanup) = self.filesystem.remove_file(target) {
                    warn!(error = %cleanup, "Could not remove unseeded target");
                }
                self.summary.failed += 1;
                return self.recover(e, "Could not seed target");
            }
        }

        if created {
            self.summary.created = true;
            info!("Created target file");
            self.console
                .report(Notice::info(format!("Created {}", target.display())))?;
        }
        Ok(())
    }

    /// Handle one top-level line and return the resulting state.
    pub fn step(&mut self, target: &Path) -> CppmResult<SessionState> {
        let Some(line) = self.console.read_line(prompts::DECLARATION)? else {
            debug!("End of input at declaration prompt");
            self.state = SessionState::Closed;
            return Ok(self.state);
        };

        match DeclarationHeader::parse(&line) {
            Ok(DeclarationHeader::Quit) => {
                self.state = SessionState::Closed;
                return Ok(self.state);
            }
            Ok(DeclarationHeader::Type { kind, name }) => {
                self.state = SessionState::EmittingType;
                let decl = self.build_type(kind, name)?;
                let text = render_type(&decl, &self.style);
                self.emit(target, &format!("{} {}", decl.kind, decl.name), &text)?;
            }
            Ok(DeclarationHeader::Function { name }) => {
                self.state = SessionState::EmittingFunction;
                let decl = self.build_function(name, false)?;
                let text = render_function(&decl, &self.style);
                self.emit(target, &format!("function {}", decl.name), &text)?;
            }
            Err(e) => {
                self.state = SessionState::Erroring;
                self.summary.rejected += 1;
                self.reject(e.into())?;
            }
        }

        self.state = SessionState::AwaitingInput;
        Ok(self.state)
    }

    /// Prompt for `name type` lines until an empty line or end of input.
    ///
    /// Malformed lines are reported and dropped; the same prompt repeats.
    pub fn collect_fields(&mut self, prompt: &str) -> CppmResult<Vec<Field>> {
        let mut fields = Vec::new();

        while let Some(line) = self.console.read_line(prompt)? {
            if line.trim().is_empty() {
                break;
            }
            match Field::parse(&line) {
                Ok(field) => fields.push(field),
                Err(e) => self.reject(e.into())?,
            }
        }

        Ok(fields)
    }

    /// Prompt for description, return type and parameters of `name`.
    pub fn build_function(
        &mut self,
        name: impl Into<String>,
        nested: bool,
    ) -> CppmResult<FunctionDeclaration> {
        let description = self.read_text(prompts::DESCRIPTION)?;
        let return_type = self.read_text(prompts::RETURN_TYPE)?;
        let parameters = self.collect_fields(prompts::PARAMETER)?;

        Ok(FunctionDeclaration::new(name, nested)
            .with_description(description)
            .with_return_type(return_type)
            .with_parameters(parameters))
    }

    /// Prompt for description, attributes and methods of a class/struct.
    pub fn build_type(
        &mut self,
        kind: TypeKind,
        name: impl Into<String>,
    ) -> CppmResult<TypeDeclaration> {
        let description = self.read_text(prompts::DESCRIPTION)?;
        let attributes = self.collect_fields(prompts::ATTRIBUTE)?;

        let mut decl = TypeDeclaration::new(kind, name)
            .with_description(description)
            .with_attributes(attributes);

        while let Some(line) = self.console.read_line(prompts::METHOD)? {
            let method = line.trim();
            if method.is_empty() {
                break;
            }
            let method = self.build_function(method, true)?;
            decl.add_method(method);
        }

        Ok(decl)
    }

    fn read_text(&mut self, prompt: &str) -> CppmResult<String> {
        Ok(self.console.read_line(prompt)?.unwrap_or_default())
    }

    fn emit(&mut self, target: &Path, label: &str, text: &str) -> CppmResult<()> {
        match self.filesystem.append_text(target, &format!("{text}\n")) {
            Ok(()) => {
                self.summary.appended += 1;
                debug!(declaration = label, bytes = text.len(), "Declaration appended");
                self.console.report(Notice::info(format!(
                    "Added {label} to {}",
                    target.display()
                )))
            }
            Err(e) => {
                self.summary.failed += 1;
                self.recover(e, &format!("Could not write {label}"))
            }
        }
    }

    /// Report `err` under `context` and carry on, or hand it back when the
    /// session cannot continue.
    fn recover(&mut self, err: CppmError, context: &str) -> CppmResult<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!(error = %err, "{}", context);
        self.console
            .report(Notice::error(format!("{context}: {err}")))
    }

    fn reject(&mut self, err: CppmError) -> CppmResult<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        debug!(error = %err, "Input rejected");
        self.console.report(Notice::error(err.to_string()))
    }
}
