//! Implementation of the `cppm delete` command.

use tracing::instrument;

use cppm_adapters::LocalFilesystem;
use cppm_core::application::ModuleService;

use crate::{
    cli::{DeleteCommands, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    cmd: DeleteCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = ModuleService::new(
        Box::new(LocalFilesystem::new()),
        config.layout(&global.project_dir),
    );

    match cmd {
        DeleteCommands::Module { name } => {
            let report = service.delete_module(&name)?;
            for path in &report.removed {
                output.print(&format!("Removed {}", path.display()))?;
            }
            output.success(&format!("Module '{}' deleted", report.module))?;
        }
    }
    Ok(())
}
