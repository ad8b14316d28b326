use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SalaryChartError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(e.error_type(), &e.message(), e.detail().as_deref(), None);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SalaryChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# salary-chart configuration file
# Values here are defaults; command-line flags override them.

# Dataset to chart instead of the built-in one.
# Relative paths resolve against this file's directory.
# data = "salaries.toml"

[display]
# Currency for amounts and axis labels: IDR, MYR, USD or EUR (default: IDR)
currency = "IDR"

# Only chart companies based in one country: all, indonesia, malaysia, singapore
country = "all"

# Narrow layout with a smaller label margin and font (default: false)
narrow = false

# Companies hidden on every track, by dataset key
# hidden = ["ovo"]

# Amount of each currency worth 1 IDR. These are approximations;
# adjust them to current rates. Missing entries fall back to built-in values.
[rates]
IDR = 1.0
MYR = 0.00029
USD = 0.000061
EUR = 0.000057
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
