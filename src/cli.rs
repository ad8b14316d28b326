use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::chart::CountryFilter;
use crate::currency::Currency;
use crate::output::{ColorMode, OutputFormat};

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

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "salary-chart")]
#[command(author, version, about = "Compare tech company salary bands across Southeast Asia")]
#[command(long_about = "Render monthly salary ranges per position as stacked min/max bar charts.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or data error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress notifications and informational output
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
    /// Render salary charts
    Render(RenderArgs),

    /// List companies in the dataset
    Companies(CompaniesArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by commands that read the dataset.
#[derive(Parser, Debug, Default, Clone)]
pub struct DataArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dataset file to use instead of the built-in one
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(Parser, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Track to render, or `all` for every track
    #[arg(short, long, default_value = "all")]
    pub track: String,

    /// Display currency [possible values: IDR, MYR, USD, EUR]
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Show only companies based in one country [possible values: all, indonesia, malaysia, singapore]
    #[arg(long)]
    pub country: Option<CountryFilter>,

    /// Hide a company (can be specified multiple times)
    #[arg(long, value_name = "COMPANY")]
    pub hide: Vec<String>,

    /// Show only these companies (can be specified multiple times)
    #[arg(long, value_name = "COMPANY", conflicts_with = "hide")]
    pub only: Vec<String>,

    /// Use the narrow layout (smaller label margin and font)
    #[arg(long)]
    pub narrow: bool,

    /// Output format [possible values: svg, html, json, text]
    #[arg(short, long, default_value = "svg")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Output format for listings
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Default, Clone)]
pub struct CompaniesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".salary-chart.toml")]
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
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".salary-chart.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ListFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
