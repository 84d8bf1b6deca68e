//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GEARING_<SECTION>__<KEY>`, e.g.
//!    `GEARING_GEAR__CHAINRING=52` or `GEARING_WHEEL__RIM=622`
//! 3. Config file: `--config FILE`, else `.gearing.toml` in the current
//!    directory, else `config.toml` in the user config directory
//! 4. Built-in defaults (always present)
//!
//! Chainring and cog are left unset by default so that the domain's own
//! defaults apply when nothing overrides them.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use gearing_core::domain::{DEFAULT_CHAINRING, DEFAULT_COG, Wheel};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".gearing.toml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "GEARING";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tooth counts used when the command line omits them.
    pub gear: GearDefaults,
    /// Wheel used when the command line omits `--rim`/`--tire`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheel: Option<Wheel>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chainring: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cog: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// One of `auto`, `human`, `plain`, `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// The configuration written by `gearing init`.
    ///
    /// Spells out the tooth-count defaults so they are easy to edit.
    pub fn starter() -> Self {
        Self {
            gear: GearDefaults {
                chainring: Some(DEFAULT_CHAINRING),
                cog: Some(DEFAULT_COG),
            },
            ..Self::default()
        }
    }

    /// Load configuration from file and environment on top of defaults.
    ///
    /// A file passed via `--config` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::active_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| Self::describe_sources(path, required))
    }

    /// Where a merged value may have come from, for error context.
    ///
    /// An optional file that does not exist is left out, so the message
    /// never blames a file that was never read.
    fn describe_sources(path: &Path, required: bool) -> String {
        if required || path.is_file() {
            format!(
                "Invalid configuration (file {} and {ENV_PREFIX}_* environment)",
                path.display()
            )
        } else {
            format!("Invalid configuration ({ENV_PREFIX}_* environment)")
        }
    }

    /// The file `load(None)` reads: the local file if present, else the
    /// user-level one.
    pub fn active_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }

    /// Path to the user-level configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gearing.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gearing", "gearing")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_leaves_tooth_counts_to_domain() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.gear.chainring, None);
        assert_eq!(cfg.gear.cog, None);
        assert!(cfg.wheel.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
        assert_eq!(AppConfig::default().output.format, "auto");
    }

    #[test]
    fn starter_spells_out_defaults() {
        let cfg = AppConfig::starter();
        assert_eq!(cfg.gear.chainring, Some(40));
        assert_eq!(cfg.gear.cog, Some(18));
    }

    #[test]
    fn load_reads_file() {
        let file = write_config(
            "[gear]\nchainring = 52\ncog = 11\n\n[wheel]\nrim = 26.0\ntire = 1.5\n",
        );
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.gear.chainring, Some(52));
        assert_eq!(cfg.gear.cog, Some(11));
        assert_eq!(cfg.wheel, Some(Wheel::new(26.0, 1.5)));
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn load_partial_file_keeps_defaults() {
        let file = write_config("[output]\nformat = \"json\"\n");
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.output.format, "json");
        assert_eq!(cfg.gear, GearDefaults::default());
        assert!(cfg.wheel.is_none());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        let file = write_config("[gear]\nchainring = \"lots\"\n");
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn starter_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::starter()).unwrap();
        let file = write_config(&text);
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg, AppConfig::starter());
    }

    #[test]
    fn absent_optional_file_is_not_blamed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        let message = AppConfig::describe_sources(&missing, false);
        assert_eq!(message, "Invalid configuration (GEARING_* environment)");
    }

    #[test]
    fn present_file_is_named_with_environment() {
        let file = write_config("");
        let message = AppConfig::describe_sources(file.path(), false);
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("GEARING_* environment"));
    }

    #[test]
    fn invalid_file_value_names_file() {
        let file = write_config("[wheel]\nrim = 26.0\n");
        let err = AppConfig::load(Some(&file.path().to_path_buf())).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("file "));
        assert!(message.contains("tire"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
