//! # cppm
//!
//! Appends class, struct and function boilerplate to C++ sources through an
//! interactive prompt, and creates, lists and deletes modules.
//!
//! Exit codes: 0 success, 1 internal, 2 bad input, 3 not found,
//! 4 configuration.

use std::io::{self, IsTerminal as _};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

/// How a failed command is shown on stderr.
#[derive(Debug, Clone, Copy)]
struct ErrorStyle {
    verbose: bool,
    color: bool,
}

fn main() -> ExitCode {
    // Before anything reads the environment (RUST_LOG, CPPM_*).
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            print!("{}", e.render().ansi());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    let config = match AppConfig::load(cli.global.config.as_ref(), &cli.global.project_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    if let Err(e) = init_logging(&cli.global, &config) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }
    debug!(
        project_dir = %cli.global.project_dir.display(),
        format = ?cli.global.output_format,
        "Configuration loaded"
    );

    let style = ErrorStyle {
        verbose: cli.global.verbose > 0,
        color: cli.global.color_allowed(&config) && io::stderr().is_terminal(),
    };
    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("cppm completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, style),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Src(args) => commands::src::execute(args, cli.global, config, output),
        Commands::Create(cmd) => commands::create::execute(cmd, cli.global, config, output),
        Commands::Delete(cmd) => commands::delete::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

fn report(err: &CliError, style: ErrorStyle) -> ExitCode {
    err.log();
    eprint!("{}", render_error(err, style));
    ExitCode::from(err.exit_code())
}

fn render_error(err: &CliError, style: ErrorStyle) -> String {
    if style.color {
        err.format_colored(style.verbose)
    } else {
        err.format_plain(style.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use cppm_core::{application::ApplicationError, error::CppmError};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn disabled_color_renders_plain_errors() {
        let err = CliError::Core(CppmError::from(ApplicationError::NotFound {
            path: "src/ghost.cpp".into(),
        }));
        let plain = render_error(
            &err,
            ErrorStyle {
                verbose: false,
                color: false,
            },
        );
        assert_eq!(plain, err.format_plain(false));
        assert!(!plain.contains('\u{1b}'));
    }
}
