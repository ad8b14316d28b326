use std::fmt::Write;

use crate::chart::{CategoryRow, ChartModel};
use crate::currency::{Currency, format_band};
use crate::error::Result;

use super::{ChartFormatter, ChartReport, EQUITY_FOOTNOTE, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// Plain-text table of every band, one block per position.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if self.use_colors {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_category(
        &self,
        output: &mut String,
        row: &CategoryRow,
        currency: Currency,
        label_width: usize,
    ) {
        let _ = writeln!(output, "{}", self.paint(&row.position, ansi::CYAN));
        for stack in &row.stacks {
            let tooltip = &stack.tooltip;
            let label = format!("{} ({})", tooltip.company, tooltip.country);
            let band = format_band(&stack.band, currency);
            let band = if stack.band.is_applicable() {
                band
            } else {
                self.paint(&band, ansi::DIM)
            };
            let _ = writeln!(output, "  {label:<label_width$}  {band}");
        }
    }

    fn write_chart(&self, output: &mut String, chart: &ChartModel) {
        let _ = writeln!(output, "{}", self.paint(&chart.title, ansi::BOLD));
        let _ = writeln!(output);

        if chart.is_empty() {
            let _ = writeln!(output, "  No companies selected");
            return;
        }

        let label_width = chart
            .categories
            .iter()
            .flat_map(|row| row.stacks.iter())
            .map(|stack| {
                let tooltip = &stack.tooltip;
                tooltip.company.chars().count() + tooltip.country.chars().count() + 3
            })
            .max()
            .unwrap_or(0);

        for (i, row) in chart.categories.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(output);
            }
            self.write_category(output, row, chart.currency, label_width);
        }
    }
}

impl ChartFormatter for TextFormatter {
    fn format(&self, report: &ChartReport) -> Result<String> {
        let mut output = String::new();

        for (i, chart) in report.charts.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(output);
            }
            self.write_chart(&mut output, chart);
        }

        let _ = writeln!(output);
        let _ = writeln!(output, "{}", self.paint(EQUITY_FOOTNOTE, ansi::DIM));
        if let Some(note) = report.conversion_note() {
            let _ = writeln!(output, "{}", self.paint(&note, ansi::DIM));
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
