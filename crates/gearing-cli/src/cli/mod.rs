//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No arithmetic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gearing",
    bin_name = "gearing",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Gear ratios and gear inches",
    long_about = "Gearing computes a gear ratio from chainring and cog tooth \
                  counts, and gear inches from that ratio and a wheel's diameter.",
    after_help = "EXAMPLES:\n\
        \x20 gearing demo\n\
        \x20 gearing inches --chainring 52 --cog 11 --rim 26 --tire 1.5\n\
        \x20 gearing ratio  --chainring 34 --cog 28\n\
        \x20 gearing wheel  --rim 622 --tire 25\n\
        \x20 gearing completions bash > /usr/share/bash-completion/completions/gearing",
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
    /// Print gear inches for a 52x11 gear and a default gear on a 26 x 1.5 wheel.
    #[command(about = "Run the two reference gears")]
    Demo,

    /// Compute gear inches.
    #[command(
        visible_alias = "gi",
        about = "Compute gear inches",
        after_help = "Omitted values are taken from the config file; chainring \
            and cog then default to 40 and 18. A wheel is required.\n\n\
            EXAMPLES:\n\
            \x20 gearing inches --chainring 52 --cog 11 --rim 26 --tire 1.5\n\
            \x20 gearing inches --rim 622 --tire 25"
    )]
    Inches(InchesArgs),

    /// Compute the gear ratio.
    #[command(
        about = "Compute the gear ratio",
        after_help = "EXAMPLES:\n\
            \x20 gearing ratio --chainring 52 --cog 11\n\
            \x20 gearing ratio              # 40 / 18"
    )]
    Ratio(RatioArgs),

    /// Measure a wheel.
    #[command(
        about = "Compute wheel diameter and circumference",
        after_help = "EXAMPLES:\n\
            \x20 gearing wheel --rim 26  --tire 1.5\n\
            \x20 gearing wheel --rim 622 --tire 25"
    )]
    Wheel(WheelArgs),

    /// Initialise a Gearing configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gearing init           # user config directory\n\
            \x20 gearing init --local   # .gearing.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gearing completions bash > ~/.local/share/bash-completion/completions/gearing\n\
            \x20 gearing completions zsh  > ~/.zfunc/_gearing\n\
            \x20 gearing completions fish > ~/.config/fish/completions/gearing.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Gearing configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gearing config get gear.chainring\n\
            \x20 gearing config list\n\
            \x20 gearing config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Subcommand name, as recorded on the command's tracing span.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Inches(_) => "inches",
            Self::Ratio(_) => "ratio",
            Self::Wheel(_) => "wheel",
            Self::Init(_) => "init",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }
}

// ── gear / wheel options ──────────────────────────────────────────────────────

/// Tooth counts shared by `inches` and `ratio`.
#[derive(Debug, Clone, Args)]
pub struct GearArgs {
    /// Chainring tooth count.
    #[arg(
        long = "chainring",
        value_name = "TEETH",
        help = "Chainring tooth count (default 40)"
    )]
    pub chainring: Option<u32>,

    /// Cog tooth count.
    #[arg(long = "cog", value_name = "TEETH", help = "Cog tooth count (default 18)")]
    pub cog: Option<u32>,
}

// ── inches ────────────────────────────────────────────────────────────────────

/// Arguments for `gearing inches`.
#[derive(Debug, Args)]
pub struct InchesArgs {
    #[command(flatten)]
    pub gear: GearArgs,

    /// Rim diameter.
    #[arg(
        long = "rim",
        value_name = "SIZE",
        requires = "tire",
        allow_negative_numbers = true,
        help = "Rim diameter"
    )]
    pub rim: Option<f64>,

    /// Tire thickness, same unit as the rim.
    #[arg(
        long = "tire",
        value_name = "SIZE",
        requires = "rim",
        allow_negative_numbers = true,
        help = "Tire thickness"
    )]
    pub tire: Option<f64>,
}

// ── ratio ─────────────────────────────────────────────────────────────────────

/// Arguments for `gearing ratio`.
#[derive(Debug, Args)]
pub struct RatioArgs {
    #[command(flatten)]
    pub gear: GearArgs,
}

// ── wheel ─────────────────────────────────────────────────────────────────────

/// Arguments for `gearing wheel`.
#[derive(Debug, Args)]
pub struct WheelArgs {
    /// Rim diameter.
    #[arg(
        long = "rim",
        value_name = "SIZE",
        allow_negative_numbers = true,
        help = "Rim diameter"
    )]
    pub rim: f64,

    /// Tire thickness, same unit as the rim.
    #[arg(
        long = "tire",
        value_name = "SIZE",
        allow_negative_numbers = true,
        help = "Tire thickness"
    )]
    pub tire: f64,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gearing init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.gearing.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gearing completions`.
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

/// Subcommands for `gearing config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `gear.chainring`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
