//! Tracing subscriber for the `cppm` binary.
//!
//! Core and adapters only emit events; this is the one place that installs
//! a subscriber. Everything goes to stderr, since stdout carries the edit
//! session's prompts and the command output.
//!
//! `RUST_LOG` replaces the `-v`/`-q` level when set.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Crates whose events are shown at the requested level.
const LOG_TARGETS: [&str; 3] = ["cppm", "cppm_core", "cppm_adapters"];

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(args.log_level())));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(args.color_allowed(config) && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `cppm=<level>,cppm_core=<level>,...`; other crates stay silent.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cppm_crate_gets_the_level() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "cppm=debug,cppm_core=debug,cppm_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_an_env_filter() {
        for level in [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::TRACE] {
            assert!(EnvFilter::try_new(directives(level)).is_ok());
        }
    }
}
