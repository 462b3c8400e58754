//! Command-line argument definitions for the FIFA 21 normalizer
//!
//! The binary is a probe over the parsers: it never reads or writes data
//! files, it only runs one column's parser over values given on the command
//! line or prints the active rules.

use crate::constants::NULL_TOKEN;
use crate::models::Column;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the FIFA 21 field normalizer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fifa-normalizer",
    version,
    about = "Probe the FIFA 21 field parsers from the command line",
    long_about = "Runs the value, wage, release clause, height, weight and hits parsers \
                  over raw cell text and reports the normalized outcome in the column's \
                  canonical unit. Blank, rejected and missing cells are reported separately."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run one column's parser over the given values
    Parse(ParseArgs),
    /// Print the active bounds and column mappings
    Rules(RulesArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Column whose parser is used (value, wage, release-clause, height, weight, hits)
    #[arg(
        short = 'c',
        long = "column",
        value_name = "COLUMN",
        help = "Column whose parser is used"
    )]
    pub column: Column,

    /// Raw cell values; the token `<null>` stands for a null cell
    #[arg(
        value_name = "VALUES",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ParseArgs {
    /// Cells as the parsers see them, with the null token mapped to `None`
    pub fn cells(&self) -> impl Iterator<Item = Option<&str>> {
        self.values
            .iter()
            .map(|value| (value != NULL_TOKEN).then_some(value.as_str()))
    }
}

/// Arguments for the rules command
#[derive(Debug, Clone, Parser)]
pub struct RulesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// JSON configuration file overriding the default bounds
    #[arg(
        long = "config",
        value_name = "FILE",
        help = "JSON configuration file (absent keys keep their defaults)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress log output except errors"
    )]
    pub quiet: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable output
    Human,
    /// JSON for scripting
    Json,
}
