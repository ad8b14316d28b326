//! Chart report formatters and terminal diagnostics.

mod error_output;
mod html;
mod html_template;
mod json;
pub mod svg;
mod text;

pub use error_output::{ErrorOutput, print_error_full};
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use svg::SvgFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::chart::{ChartModel, CountryFilter};
use crate::currency::Currency;
use crate::error::Result;

/// ANSI escape sequences shared by the terminal writers.
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Everything a formatter needs for one render: the charts plus the display
/// settings they were built with.
#[derive(Debug, Clone)]
pub struct ChartReport {
    pub currency: Currency,
    /// Multiplier from IDR to `currency`.
    pub conversion_rate: f64,
    pub country_filter: CountryFilter,
    /// Track shown first in tabbed output; the first chart when unset.
    pub active_track: Option<String>,
    pub charts: Vec<ChartModel>,
}

impl ChartReport {
    /// Footnote explaining the conversion, or `None` when showing IDR.
    #[must_use]
    pub fn conversion_note(&self) -> Option<String> {
        (self.currency != Currency::Idr).then(|| {
            format!(
                "** Conversion rate: 1 IDR ≈ {} {} (approximate)",
                self.conversion_rate, self.currency
            )
        })
    }
}

/// Footnote attached to every report.
pub const EQUITY_FOOTNOTE: &str = "* New joinee eligible for RSU/ESOP";

/// Trait for rendering chart reports into an output format.
pub trait ChartFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &ChartReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Html,
    Json,
    Text,
}

impl OutputFormat {
    /// Conventional file extension for the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// Formatter for this output format.
    #[must_use]
    pub fn formatter(self, color_mode: ColorMode) -> Box<dyn ChartFormatter> {
        match self {
            Self::Svg => Box::new(SvgFormatter),
            Self::Html => Box::new(HtmlFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Text => Box::new(TextFormatter::new(color_mode)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
