use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chart::CountryFilter;
use crate::currency::Currency;

/// Approximate conversion from 1 IDR, used when `[rates]` omits a currency.
pub const DEFAULT_RATES: [(Currency, f64); 4] = [
    (Currency::Idr, 1.0),
    (Currency::Myr, 0.00029),
    (Currency::Usd, 0.000061),
    (Currency::Eur, 0.000057),
];

/// Display defaults; CLI flags override each field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub currency: Currency,

    /// `all`, or a country name.
    #[serde(default)]
    pub country: CountryFilter,

    /// Narrow layout: smaller label margin and font.
    #[serde(default)]
    pub narrow: bool,

    /// Company keys hidden on every track.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden: Vec<String>,
}

/// Contents of `.salary-chart.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Dataset file replacing the built-in one. Relative paths resolve
    /// against the directory of the config file that names them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Currency code to the amount of that currency worth 1 IDR.
    #[serde(default = "default_rates")]
    pub rates: IndexMap<String, f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            display: DisplayConfig::default(),
            rates: default_rates(),
        }
    }
}

fn default_rates() -> IndexMap<String, f64> {
    DEFAULT_RATES
        .iter()
        .map(|(currency, rate)| (currency.code().to_string(), *rate))
        .collect()
}

impl Config {
    /// Conversion rate from IDR to `currency`: the configured value, else the
    /// built-in approximation.
    #[must_use]
    pub fn rate_for(&self, currency: Currency) -> f64 {
        self.rates
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(currency.code()))
            .map(|(_, rate)| *rate)
            .or_else(|| {
                DEFAULT_RATES
                    .iter()
                    .find(|(c, _)| *c == currency)
                    .map(|(_, rate)| *rate)
            })
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
