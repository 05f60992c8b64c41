//! Implementation of the `cppm src` command.
//!
//! Without `--list` this runs the interactive declaration editor on one file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use cppm_adapters::{LocalFilesystem, StdioConsole};
use cppm_core::application::{EditSession, ModuleService, SessionSummary};

use crate::{
    cli::{GlobalArgs, OutputFormat, SrcArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct SourceListing {
    root: PathBuf,
    files: Vec<PathBuf>,
}

#[instrument(skip_all, fields(list = args.list))]
pub fn execute(
    args: SrcArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if args.list {
        return list(&global.project_dir, &config, &output);
    }

    let target = resolve_target(&global.project_dir, args.file.as_deref(), &config);
    debug!(target = %target.display(), "Target resolved");

    let filesystem = LocalFilesystem::new();
    let mut console = StdioConsole::stdio();
    let summary = EditSession::new(&filesystem, &mut console)
        .with_style(config.style)
        .with_seed(config.session.seed)
        .run(&target)?;

    info!(?summary, "Edit session finished");
    output.print("")?;
    output.success(&describe(&summary, &target))?;
    if summary.failed > 0 {
        output.warning(&format!(
            "{} declaration(s) could not be written",
            summary.failed
        ))?;
    }
    Ok(())
}

/// File to edit: the argument if given, else the configured default, both
/// relative to the project directory unless absolute.
pub fn resolve_target(project_dir: &Path, file: Option<&Path>, config: &AppConfig) -> PathBuf {
    let file = file.unwrap_or(&config.layout.default_source);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        project_dir.join(file)
    }
}

fn describe(summary: &SessionSummary, target: &Path) -> String {
    let noun = if summary.appended == 1 {
        "declaration"
    } else {
        "declarations"
    };
    format!(
        "{} {noun} added to {}",
        summary.appended,
        target.display()
    )
}

fn list(project_dir: &Path, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = ModuleService::new(Box::new(LocalFilesystem::new()), config.layout(project_dir));
    let files = service.list_sources()?;

    if output.format() == OutputFormat::Json {
        let listing = SourceListing {
            root: project_dir.to_path_buf(),
            files,
        };
        let json = serde_json::to_string_pretty(&listing).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to serialise listing: {e}"),
            source: Some(Box::new(e)),
        })?;
        // JSON bypasses quiet mode so pipes always get a parseable document.
        println!("{json}");
        return Ok(());
    }

    if files.is_empty() {
        output.info("No source files found")?;
        return Ok(());
    }

    output.header(&format!("Sources in {}:", service.layout().root().display()))?;
    for file in files {
        output.print(&format!("  {}", file.display()))?;
    }
    Ok(())
}
