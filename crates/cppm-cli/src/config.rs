//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the pieces it needs
//! (a `RenderStyle`, a seed string, a `ProjectLayout`).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CPPM_<SECTION>__<KEY>`, e.g. `CPPM_SESSION__SEED`
//! 3. Config file: `--config FILE`, otherwise the user config file and
//!    `.cppm.toml` in the project directory, both optional
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use cppm_core::{
    application::DEFAULT_SEED,
    domain::{ProjectLayout, RenderStyle},
};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".cppm.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where sources and headers live.
    pub layout: LayoutConfig,
    /// Edit session settings.
    pub session: SessionConfig,
    /// Indentation and markers of generated code.
    pub style: RenderStyle,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub src_dir: PathBuf,
    pub include_dir: PathBuf,
    /// File edited by `cppm src` when no FILE is given.
    pub default_source: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Written into a file the edit session creates.
    pub seed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            include_dir: PathBuf::from("include"),
            default_source: PathBuf::from("src/main.cpp"),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file(s), then environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>, project_dir: &Path) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;
        let mut builder = config::Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
            None => builder
                .add_source(config::File::from(Self::config_path()).required(false))
                .add_source(
                    config::File::from(project_dir.join(LOCAL_CONFIG_FILE)).required(false),
                ),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix("CPPM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cppm.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "cppm", "cppm")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Project layout rooted at `project_dir`.
    pub fn layout(&self, project_dir: &Path) -> ProjectLayout {
        ProjectLayout::new(project_dir)
            .with_src_dir(&self.layout.src_dir)
            .with_include_dir(&self.layout.include_dir)
    }
}
