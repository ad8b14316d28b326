//! Configuration semantic validation.
//!
//! Checks values that parse but make no sense: unusable rates and blank
//! company keys.

use crate::config::Config;
use crate::currency::Currency;
use crate::{Result, SalaryChartError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a rate is not a finite positive number, a rate names an
/// unsupported currency, or a hidden company key is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_rates(config)?;
    validate_hidden(config)?;
    Ok(())
}

fn validate_rates(config: &Config) -> Result<()> {
    for (code, rate) in &config.rates {
        if Currency::from_code(code).is_none() {
            return Err(SalaryChartError::UnknownCurrency(code.clone()));
        }
        if !rate.is_finite() || *rate <= 0.0 {
            return Err(SalaryChartError::Config(format!(
                "rates.{code} must be a positive number, got {rate}"
            )));
        }
    }
    Ok(())
}

fn validate_hidden(config: &Config) -> Result<()> {
    if let Some(i) = config
        .display
        .hidden
        .iter()
        .position(|key| key.trim().is_empty())
    {
        return Err(SalaryChartError::Config(format!(
            "display.hidden[{i}] must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
