//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::Args;
use tracing::level_filters::LevelFilter;

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more to stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colors (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read configuration from FILE instead of the default locations
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// C++ project root; src/ and include/ are resolved against it
    #[arg(
        short = 'C',
        long,
        global = true,
        value_name = "DIR",
        default_value = "."
    )]
    pub project_dir: PathBuf,

    /// How command results are printed
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Log level from `-q` / `-v`; `-q` wins.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Colors are allowed unless the flag, `NO_COLOR` or `output.no_color`
    /// turn them off. Callers still check whether their stream is a TTY.
    pub fn color_allowed(&self, config: &AppConfig) -> bool {
        !(self.no_color || config.output.no_color)
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise
    #[default]
    Auto,
    /// Colored text
    Human,
    /// Text without colors
    Plain,
    /// JSON documents (`src --list`)
    Json,
}
