//! `cppm config` - inspect and initialise configuration.

use std::{fs, path::Path};

use tracing::info;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Init { local, force } => {
            let path = if local {
                global.project_dir.join(LOCAL_CONFIG_FILE)
            } else {
                AppConfig::config_path()
            };
            init_config_file(&path, force)?;
            info!(path = %path.display(), "Config written");
            output.success(&format!("Wrote {}", path.display()))?;
        }

        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn init_config_file(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput {
            message: format!("{} already exists (use --force to overwrite)", path.display()),
            source: None,
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, to_toml(&AppConfig::default())?)
        .with_cli_context(|| format!("writing {}", path.display()))
}

/// Look up a dotted key such as `style.body_indent`.
///
/// Strings print raw; anything else prints as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&tree, |node, segment| node.get(segment))
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })?;

    Ok(match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_string_key_prints_raw() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "style.visibility").unwrap(), "public:");
        assert_eq!(
            get_config_value(&cfg, "layout.default_source").unwrap(),
            "src/main.cpp"
        );
    }

    #[test]
    fn get_bool_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_section_prints_json() {
        let cfg = AppConfig::default();
        let section = get_config_value(&cfg, "session").unwrap();
        assert!(section.starts_with('{'));
        assert!(section.contains("seed"));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn init_writes_loadable_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        init_config_file(&path, false).unwrap();

        let loaded = AppConfig::load(Some(&path), tmp.path()).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "# mine\n").unwrap();

        assert!(matches!(
            init_config_file(&path, false),
            Err(CliError::InvalidInput { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config_file(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[layout]"));
    }
}
