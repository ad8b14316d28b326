//! Supported display currencies and salary formatting.

mod format;

pub use format::{format_band, format_salary, format_salary_code, group_thousands};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SalaryChartError;

/// Currency a chart can be displayed in.
///
/// Dataset amounts are stored in IDR; other currencies are reached through a
/// conversion rate from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    #[default]
    Idr,
    Myr,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Self; 4] = [Self::Idr, Self::Myr, Self::Usd, Self::Eur];

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Idr => "IDR",
            Self::Myr => "MYR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Prefix placed before amounts, including any trailing space.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Idr => "Rp ",
            Self::Myr => "RM ",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// Human readable name shown in selectors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idr => "Rupiah",
            Self::Myr => "Ringgit",
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
        }
    }

    /// Parse an ISO code, case-insensitively. Returns `None` for unsupported codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = SalaryChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SalaryChartError::UnknownCurrency(s.to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = SalaryChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
