use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{OutputFormat, SeverityFilter};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "spec-guard")]
#[command(author, version, about = "Spec document quality guard - lint and score specification documents")]
#[command(long_about = "A tool to validate structured specification documents against \
    configurable rules and produce a deterministic 0-100 quality score.\n\n\
    Exit codes:\n  \
    0 - No error-severity issues found\n  \
    1 - At least one error-severity issue found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate spec documents and report quality scores
    Validate(ValidateArgs),

    /// List the resolved rule set (builtins merged with config)
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Spec file or directory to validate (default: current directory)
    pub target: Option<PathBuf>,

    /// Validate every spec under the project's document root, recursively
    #[arg(long)]
    pub all: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Minimum severity of issues to display [possible values: error, warning, info, all]
    #[arg(long, default_value = "all")]
    pub severity: SeverityFilter,

    /// Project root for config discovery and --all resolution
    #[arg(long = "path")]
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".spec-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and rule references
    Validate {
        /// Path to configuration file (default: .spec-guard.toml)
        #[arg(short, long, default_value = ".spec-guard.toml")]
        config: PathBuf,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
