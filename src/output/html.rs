use std::fmt::Write;

use crate::chart::ChartModel;
use crate::error::Result;

use super::html_template::{HTML_HEADER, HTML_SCRIPT};
use super::svg::{StackedBarChart, SvgElement, html_escape};
use super::{ChartFormatter, ChartReport, EQUITY_FOOTNOTE};

/// Self-contained dashboard page: one tab per track, each holding its chart.
///
/// Legend entries toggle their company's stacks client-side; currency and
/// country are fixed at render time.
pub struct HtmlFormatter;

impl HtmlFormatter {
    fn write_settings(output: &mut String, report: &ChartReport) {
        output.push_str("        <div class=\"settings\">\n");
        let _ = writeln!(
            output,
            r#"            <span class="setting">Currency: <strong>{}</strong></span>"#,
            report.currency
        );
        let _ = writeln!(
            output,
            r#"            <span class="setting">Country: <strong>{}</strong></span>"#,
            report.country_filter.label()
        );
        output.push_str("        </div>\n");
    }

    fn write_tabs(output: &mut String, charts: &[ChartModel], active: &str) {
        if charts.len() < 2 {
            return;
        }

        output.push_str("        <div class=\"tab-list\" role=\"tablist\">\n");
        for chart in charts {
            let class = if chart.track_id == active {
                "tab-btn active"
            } else {
                "tab-btn"
            };
            let label = chart
                .title
                .strip_suffix(" Salary Ranges")
                .unwrap_or(&chart.title);
            let _ = writeln!(
                output,
                r#"            <button class="{class}" role="tab" data-track="{}">{}</button>"#,
                html_escape(&chart.track_id),
                html_escape(label)
            );
        }
        output.push_str("        </div>\n");
    }

    fn write_panel(output: &mut String, chart: &ChartModel, active: bool) {
        let class = if active { "tab-panel active" } else { "tab-panel" };
        let _ = writeln!(
            output,
            r#"        <section class="{class}" data-track="{}">"#,
            html_escape(&chart.track_id)
        );
        output.push_str("            <div class=\"chart-container\">\n");
        let _ = writeln!(
            output,
            "                <h2>{}</h2>",
            html_escape(&chart.title)
        );
        let svg = StackedBarChart::new(chart).render();
        for line in svg.lines() {
            let _ = writeln!(output, "                {line}");
        }
        output.push_str("            </div>\n");
        output.push_str("        </section>\n");
    }

    fn write_footer(output: &mut String, report: &ChartReport) {
        output.push_str("        <div class=\"footer\">\n");
        let _ = writeln!(output, "            <p>{}</p>", html_escape(EQUITY_FOOTNOTE));
        if let Some(note) = report.conversion_note() {
            let _ = writeln!(output, "            <p>{}</p>", html_escape(&note));
        }
        output.push_str("        </div>\n");
    }
}

impl ChartFormatter for HtmlFormatter {
    fn format(&self, report: &ChartReport) -> Result<String> {
        let mut output = String::from(HTML_HEADER);

        let active = report
            .active_track
            .as_deref()
            .filter(|id| report.charts.iter().any(|c| c.track_id == *id))
            .or_else(|| report.charts.first().map(|c| c.track_id.as_str()))
            .unwrap_or_default();

        Self::write_settings(&mut output, report);
        Self::write_tabs(&mut output, &report.charts, active);
        for chart in &report.charts {
            Self::write_panel(&mut output, chart, chart.track_id == active);
        }
        Self::write_footer(&mut output, report);
        output.push_str(HTML_SCRIPT);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
