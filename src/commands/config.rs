use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ListFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SalaryChartError};

use super::context::{load_config, select_dataset};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn report(e: &SalaryChartError) {
    print_error_full(
        e.error_type(),
        &e.message(),
        e.detail().as_deref(),
        e.suggestion(),
    );
}

/// Validates a configuration file and the dataset it points at.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, has
/// out-of-range values, names a dataset that fails to load, or hides a
/// company that dataset does not define.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(SalaryChartError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let loaded = FileConfigLoader::new().load_from_path(config_path)?;
    let dataset = select_dataset(None, &loaded.config)?;
    for key in &loaded.config.display.hidden {
        dataset.require_company(key)?;
    }

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ListFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ListFormat,
    cli: &Cli,
) -> Result<String> {
    let loaded = load_config(config_path, cli.no_config)?;

    match format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ListFormat::Text => Ok(format_config_text(&loaded.config, loaded.source.as_deref())),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config, source: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    let _ = writeln!(
        output,
        "source = {}",
        source.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
    );
    let _ = writeln!(
        output,
        "data = {}",
        config
            .data
            .as_ref()
            .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
    );

    output.push_str("\n[display]\n");
    let _ = writeln!(output, "  currency = \"{}\"", config.display.currency);
    let _ = writeln!(output, "  country = \"{}\"", config.display.country);
    let _ = writeln!(output, "  narrow = {}", config.display.narrow);
    if !config.display.hidden.is_empty() {
        let _ = writeln!(output, "  hidden = {:?}", config.display.hidden);
    }

    output.push_str("\n[rates]\n");
    for (code, rate) in &config.rates {
        let _ = writeln!(output, "  {code} = {rate}");
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
