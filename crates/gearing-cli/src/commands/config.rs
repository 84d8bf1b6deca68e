//! `gearing config` — inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.emit(format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.emit(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = explicit.unwrap_or_else(AppConfig::active_path);
            output.emit(path.display())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

const UNSET: &str = "(unset)";

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    fn or_unset<T: ToString>(value: Option<T>) -> String {
        value.map_or_else(|| UNSET.to_string(), |v| v.to_string())
    }

    match key {
        "gear.chainring" => Ok(or_unset(config.gear.chainring)),
        "gear.cog" => Ok(or_unset(config.gear.cog)),
        "wheel.rim" => Ok(or_unset(config.wheel.map(|w| w.rim()))),
        "wheel.tire" => Ok(or_unset(config.wheel.map(|w| w.tire()))),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
