//! Hover text for stacked bar segments.

use std::fmt;

use serde::Serialize;

use crate::currency::{Currency, format_salary};
use crate::dataset::CompanyRegistry;

use super::transform::{ChartRecord, split_field};

/// Content of a segment's tooltip.
///
/// Hovering either segment of a stack shows both ends of the company's band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub position: String,
    pub company: String,
    pub country: String,
    pub min: String,
    pub max: String,
}

impl Tooltip {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - {} ({})", self.position, self.company, self.country)
    }

    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            self.heading(),
            format!("Min: {}", self.min),
            format!("Max: {}", self.max),
        ]
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Build the tooltip for the segment bound to `field` (e.g. `tiket_max`).
///
/// Returns `None` when the field has no `_min`/`_max` suffix or names a
/// company that is not in the record or registry.
#[must_use]
pub fn tooltip_for(
    record: &ChartRecord,
    field: &str,
    registry: &CompanyRegistry,
    currency: Currency,
) -> Option<Tooltip> {
    let (key, _) = split_field(field)?;
    let company = registry.get(key)?;
    let band = record.band(key)?;

    Some(Tooltip {
        position: record.position.clone(),
        company: company.name(),
        country: company.region.label().to_string(),
        min: format_salary(band.min.unwrap_or(0.0), currency, false),
        max: format_salary(band.max.unwrap_or(0.0), currency, false),
    })
}

#[cfg(test)]
#[path = "tooltip_tests.rs"]
mod tests;
