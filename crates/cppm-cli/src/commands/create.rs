//! Implementation of the `cppm create` command.

use tracing::{info, instrument};

use cppm_adapters::LocalFilesystem;
use cppm_core::application::ModuleService;

use crate::{
    cli::{CreateCommands, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    cmd: CreateCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = ModuleService::new(
        Box::new(LocalFilesystem::new()),
        config.layout(&global.project_dir),
    );

    let written = match cmd {
        CreateCommands::Header { name, force } => vec![service.create_header(&name, force)?],
        CreateCommands::Module {
            name,
            header,
            force,
        } => service.create_module(&name, header, force)?,
    };

    for path in &written {
        info!(path = %path.display(), "File written");
        output.success(&format!("Created {}", path.display()))?;
    }
    Ok(())
}
