//! Command implementations for the normalizer CLI

use crate::cli::args::{Args, CommonArgs, Commands, OutputFormat, ParseArgs, RulesArgs};
use crate::config::NormalizerConfig;
use crate::constants::NULL_TOKEN;
use crate::models::{Column, Normalized};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// One probed cell, as reported to the user
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub input: Option<String>,
    pub status: &'static str,
    pub value: Option<f64>,
    pub reason: Option<&'static str>,
    pub unit: &'static str,
}

impl ProbeResult {
    fn new(column: Column, input: Option<&str>, outcome: Normalized) -> Self {
        Self {
            input: input.map(str::to_string),
            status: outcome.status_label(),
            value: outcome.value(),
            reason: outcome.reject_reason().map(|reason| reason.label()),
            unit: column.unit(),
        }
    }
}

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Parse(parse_args)) => run_parse(parse_args).map(|_| ()),
        Some(Commands::Rules(rules_args)) => run_rules(rules_args),
        None => Ok(()),
    }
}

/// Set up structured logging on stderr
///
/// Returns `false` when a global subscriber was already installed, which
/// happens when several commands run in one process.
pub fn setup_logging(args: &CommonArgs) -> bool {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fifa_normalizer={}", args.get_log_level())));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    match installed {
        Ok(()) => true,
        Err(e) => {
            debug!("Keeping existing log subscriber: {}", e);
            false
        }
    }
}

/// Build the configuration from defaults or the given file
pub fn load_config(args: &CommonArgs) -> Result<NormalizerConfig> {
    let config = match &args.config_file {
        Some(path) => NormalizerConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => NormalizerConfig::default(),
    };
    config
        .validate()
        .context("Configuration validation failed")?;
    Ok(config)
}

/// Run one parser over the given values and print every outcome
pub fn run_parse(args: ParseArgs) -> Result<Vec<ProbeResult>> {
    setup_logging(&args.common);
    let config = load_config(&args.common)?;

    info!(
        "Probing {} value(s) with the {} parser",
        args.values.len(),
        args.column
    );

    let results: Vec<ProbeResult> = args
        .cells()
        .map(|cell| {
            let outcome = args.column.parse(cell, &config.bounds);
            debug!("{:?} -> {}", cell, outcome);
            ProbeResult::new(args.column, cell, outcome)
        })
        .collect();

    match args.common.output_format {
        OutputFormat::Human => print_human(args.column, &results),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results)
                .context("Failed to serialize probe results")?;
            println!("{}", json);
        }
    }

    Ok(results)
}

fn print_human(column: Column, results: &[ProbeResult]) {
    println!(
        "{} {}",
        column.source_name().bright_cyan().bold(),
        format!("({})", column.unit()).bright_black()
    );

    for result in results {
        let input = match &result.input {
            Some(text) => format!("{:?}", text),
            None => NULL_TOKEN.to_string(),
        };
        let outcome = match (result.value, result.reason) {
            (Some(value), _) => format!("{} {} {}", result.status, value, result.unit)
                .bright_green()
                .to_string(),
            (None, Some(reason)) => format!("{} ({})", result.status, reason)
                .bright_red()
                .to_string(),
            (None, None) => result.status.bright_yellow().to_string(),
        };
        println!("  {:<16} {}", input, outcome);
    }
}

/// Print the active bounds and column mappings
pub fn run_rules(args: RulesArgs) -> Result<()> {
    setup_logging(&args.common);
    let config = load_config(&args.common)?;

    match args.common.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize configuration")?;
            println!("{}", json);
        }
        OutputFormat::Human => print_rules(&config),
    }

    Ok(())
}

fn print_rules(config: &NormalizerConfig) {
    let bounds = &config.bounds;

    println!("{}", "Domain bounds".bright_green().bold());
    println!("  value            [0, {}] EUR", bounds.value_max);
    println!("  wage             [0, {}] thousand EUR", bounds.wage_max_thousands);
    println!("  release clause   [0, {}] EUR", bounds.release_clause_max);
    println!(
        "  height           ({}, {}] cm",
        bounds.height_min_exclusive, bounds.height_max
    );
    println!(
        "  weight           [{}, {}] kg ({} lbs per kg)",
        bounds.weight_min, bounds.weight_max, bounds.pounds_per_kilogram
    );
    println!();

    println!("{}", "Columns".bright_green().bold());
    for &column in &config.columns {
        println!(
            "  {:<16} -> {:<14} {}",
            column.source_name().bright_cyan(),
            config.output_name(column),
            format!("[{}, missing as {:?}]", column.unit(), column.missing_policy())
                .bright_black()
        );
    }

    if !config.drop_columns.is_empty() {
        println!();
        println!(
            "{} {}",
            "Dropped:".bright_green().bold(),
            config.drop_columns.join(", ")
        );
    }
}
