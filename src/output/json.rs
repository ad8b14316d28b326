use serde::Serialize;

use crate::chart::{ChartModel, CountryFilter};
use crate::currency::Currency;
use crate::error::Result;

use super::{ChartFormatter, ChartReport, EQUITY_FOOTNOTE};

/// Machine-readable report: display settings, footnotes and the full chart
/// models, including the flat `<company>_min` / `<company>_max` records.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    currency: Currency,
    conversion_rate: f64,
    country_filter: CountryFilter,
    footnotes: Vec<String>,
    charts: &'a [ChartModel],
}

impl ChartFormatter for JsonFormatter {
    fn format(&self, report: &ChartReport) -> Result<String> {
        let footnotes = std::iter::once(EQUITY_FOOTNOTE.to_string())
            .chain(report.conversion_note())
            .collect();

        let output = JsonOutput {
            currency: report.currency,
            conversion_rate: report.conversion_rate,
            country_filter: report.country_filter,
            footnotes,
            charts: &report.charts,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
