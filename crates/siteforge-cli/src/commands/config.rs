//! The `config` subcommands: inspect the active configuration.

use crate::cli::ConfigCommands;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => get(&key, &config, &output),
        ConfigCommands::List => list(&config, &output),
        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
            Ok(())
        }
    }
}

fn get(key: &str, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let value = match key {
        "defaults.format" => config.defaults.format.clone(),
        "defaults.package_name" => config.defaults.package_name.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "catalog.local_path" => config
            .catalog
            .local_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        _ => {
            return Err(CliError::UnknownConfigKey {
                key: key.to_owned(),
            });
        }
    };

    output.print(&value)?;
    Ok(())
}

fn list(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let rendered = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("failed to serialize configuration: {e}"),
        source: None,
    })?;
    output.print(rendered.trim_end())?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cli::global::{GlobalArgs, OutputFormat};

    fn test_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            catalog: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn known_keys_resolve() {
        let out = test_output();
        let cfg = AppConfig::default();
        for key in [
            "defaults.format",
            "defaults.package_name",
            "output.no_color",
            "catalog.local_path",
        ] {
            assert!(get(key, &cfg, &out).is_ok(), "key {key} should resolve");
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let out = test_output();
        let err = get("defaults.nope", &AppConfig::default(), &out).unwrap_err();
        assert!(matches!(err, CliError::UnknownConfigKey { .. }));
    }

    #[test]
    fn list_renders_defaults() {
        let out = test_output();
        assert!(list(&AppConfig::default(), &out).is_ok());
    }
}
