//! Salary amount formatting for axis ticks and tooltips.

use super::Currency;
use crate::dataset::CompensationBand;

/// Text shown for amounts that are not applicable.
pub const NOT_APPLICABLE: &str = "N/A";

/// Format a salary amount in `currency`.
///
/// Zero is the "not applicable" marker and always renders as `N/A`.
/// Abbreviated mode is meant for axis ticks (`Rp 1.5M`, `RM 4.3K`); full mode
/// rounds to whole units with thousands grouping (`RM 4,336`).
#[must_use]
pub fn format_salary(value: f64, currency: Currency, abbreviated: bool) -> String {
    format_with_symbol(value, currency.symbol(), abbreviated)
}

/// Format a salary amount for an arbitrary currency code.
///
/// Unsupported codes never fail: abbreviated output drops the symbol and full
/// output falls back to `"{CODE} 1,234"`.
#[must_use]
pub fn format_salary_code(value: f64, code: &str, abbreviated: bool) -> String {
    match Currency::from_code(code) {
        Some(currency) => format_salary(value, currency, abbreviated),
        None if abbreviated => format_with_symbol(value, "", true),
        None => {
            let prefix = if code.is_empty() {
                String::new()
            } else {
                format!("{} ", code.trim().to_uppercase())
            };
            format_with_symbol(value, &prefix, false)
        }
    }
}

/// Format both ends of a band as `"min - max"`, with `N/A` for absent bounds.
#[must_use]
pub fn format_band(band: &CompensationBand, currency: Currency) -> String {
    let min = format_salary(band.min.unwrap_or(0.0), currency, false);
    let max = format_salary(band.max.unwrap_or(0.0), currency, false);
    format!("{min} - {max}")
}

fn format_with_symbol(value: f64, symbol: &str, abbreviated: bool) -> String {
    if value == 0.0 {
        return NOT_APPLICABLE.to_string();
    }

    if abbreviated {
        let magnitude = value.abs();
        let sign = if value < 0.0 { "-" } else { "" };
        if magnitude >= 1_000_000.0 {
            return format!("{sign}{symbol}{:.1}M", one_decimal(magnitude / 1_000_000.0));
        } else if magnitude >= 1_000.0 {
            return format!("{sign}{symbol}{:.1}K", one_decimal(magnitude / 1_000.0));
        }
        return format!("{sign}{symbol}{}", raw_number(magnitude));
    }

    let sign = if value < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = value.abs().round() as u64;
    format!("{sign}{symbol}{}", group_thousands(whole))
}

/// Round to one decimal with ties away from zero (`1.25` -> `1.3`).
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a number the way a JS template literal would: no trailing `.0`.
fn raw_number(value: f64) -> String {
    if value.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = value as u64;
        whole.to_string()
    } else {
        value.to_string()
    }
}

/// Insert `,` between groups of three digits (`1234567` -> `1,234,567`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
