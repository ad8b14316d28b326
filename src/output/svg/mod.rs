//! SVG rendering of salary charts.
//!
//! Charts scale through `viewBox`, take colors from `var(--color-*)` CSS
//! variables where a theme applies, and carry `<title>` elements that serve
//! both as hover tooltips and as accessible names.

mod builder;
mod chart;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use chart::{StackedBarChart, category_metrics};
pub use element::{Axis, AxisOrientation, Bar, GridLine, SvgElement};
pub use format::{coord, html_escape};
pub use style::{ChartColor, TextAnchor};

use crate::chart::ChartModel;
use crate::error::Result;

use super::{ChartFormatter, ChartReport};

/// Render one chart model as a standalone SVG document.
#[must_use]
pub fn render_chart(model: &ChartModel) -> String {
    StackedBarChart::new(model).render()
}

/// SVG output. A single chart is emitted as-is; several charts are stacked
/// vertically as nested documents inside one enclosing `<svg>`.
pub struct SvgFormatter;

impl ChartFormatter for SvgFormatter {
    fn format(&self, report: &ChartReport) -> Result<String> {
        if let [single] = report.charts.as_slice() {
            return Ok(render_chart(single));
        }

        let mut offset = 0.0;
        let mut builder = SvgBuilder::new(0.0, 0.0);
        let mut width: f64 = 0.0;
        for model in &report.charts {
            let chart = StackedBarChart::new(model).nested_at(offset);
            width = width.max(chart.width());
            offset += chart.height();
            builder = builder.push_raw(chart.render());
        }

        Ok(builder.resize(width, offset).build())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
