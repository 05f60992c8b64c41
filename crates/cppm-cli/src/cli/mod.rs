//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cppm",
    bin_name = "cppm",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "C++ project manager",
    long_about = "cppm manages modules and headers of a C++ project and \
                  appends class, struct and function boilerplate to source \
                  files through an interactive prompt.",
    after_help = "EXAMPLES:\n\
        \x20 cppm src                         # edit src/main.cpp\n\
        \x20 cppm src src/shapes.cpp\n\
        \x20 cppm src --list\n\
        \x20 cppm create module parser --header\n\
        \x20 cppm delete module parser",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Edit or list source files.
    #[command(
        about = "Edit or list source files",
        after_help = "EXAMPLES:\n\
            \x20 cppm src\n\
            \x20 cppm src src/geometry.cpp\n\
            \x20 cppm src --list --output-format json\n\n\
            In the editor, answer the prompts; type 'quit' to finish."
    )]
    Src(SrcArgs),

    /// Create a header or a module.
    #[command(
        subcommand,
        about = "Create a header or module",
        after_help = "EXAMPLES:\n\
            \x20 cppm create header config\n\
            \x20 cppm create module parser --header"
    )]
    Create(CreateCommands),

    /// Delete a module.
    #[command(
        subcommand,
        about = "Delete a module",
        after_help = "EXAMPLES:\n\
            \x20 cppm delete module parser"
    )]
    Delete(DeleteCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cppm completions bash > ~/.local/share/bash-completion/completions/cppm\n\
            \x20 cppm completions zsh  > ~/.zfunc/_cppm\n\
            \x20 cppm completions fish > ~/.config/fish/completions/cppm.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the cppm configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cppm config init\n\
            \x20 cppm config get session.seed\n\
            \x20 cppm config list"
    )]
    Config(ConfigCommands),
}

// ── src ───────────────────────────────────────────────────────────────────────

/// Arguments for `cppm src`.
#[derive(Debug, Args)]
pub struct SrcArgs {
    /// File to edit, relative to the project directory.
    #[arg(
        value_name = "FILE",
        help = "Source file to edit (default: layout.default_source)"
    )]
    pub file: Option<PathBuf>,

    /// List source files instead of editing.
    #[arg(
        short = 'l',
        long = "list",
        conflicts_with = "file",
        help = "List source and header files"
    )]
    pub list: bool,
}

// ── create / delete ───────────────────────────────────────────────────────────

/// Subcommands for `cppm create`.
#[derive(Debug, Subcommand)]
pub enum CreateCommands {
    /// Create `include/<NAME>.h` with an include guard.
    Header {
        /// Header base name, without extension.
        name: String,
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Create `src/<NAME>.cpp`, optionally with its header.
    Module {
        /// Module base name, without extension.
        name: String,
        /// Also create `include/<NAME>.h`.
        #[arg(long = "header")]
        header: bool,
        /// Overwrite existing files.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

/// Subcommands for `cppm delete`.
#[derive(Debug, Subcommand)]
pub enum DeleteCommands {
    /// Remove `src/<NAME>.cpp` and `include/<NAME>.h`.
    Module {
        /// Module base name, without extension.
        name: String,
    },
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cppm completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cppm config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration file.
    Init {
        /// Write `.cppm.toml` in the project directory instead of the
        /// user config location.
        #[arg(long = "local")]
        local: bool,
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `session.seed`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
