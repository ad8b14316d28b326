//! Horizontal stacked min/max bar chart for one track.

use std::fmt::Write;

use crate::chart::{CategoryRow, ChartModel, CompanyStack, LegendEntry};

use super::builder::SvgBuilder;
use super::element::{Axis, Bar, GridLine, SvgElement};
use super::format::{coord, html_escape};
use super::style::ChartColor;

const WIDTH: f64 = 800.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const AXIS_HEIGHT: f64 = 30.0;
const BAR_HEIGHT: f64 = 10.0;
const BAR_GAP: f64 = 2.0;
const CATEGORY_PADDING: f64 = 8.0;
const LEGEND_ITEM_WIDTH: f64 = 150.0;
const LEGEND_ROW_HEIGHT: f64 = 20.0;
const SWATCH_SIZE: f64 = 12.0;
const EMPTY_HEIGHT: f64 = 200.0;

/// Left margin and category-label font size for the viewport.
#[must_use]
pub const fn category_metrics(narrow: bool) -> (f64, f64) {
    if narrow { (100.0, 10.0) } else { (150.0, 12.0) }
}

/// Renders a [`ChartModel`] as a standalone SVG document.
///
/// Each position is a category band; each visible company contributes one
/// `<g class="stack">` holding its min and max segments.
#[derive(Debug)]
pub struct StackedBarChart<'a> {
    model: &'a ChartModel,
    margin_left: f64,
    category_font: f64,
    offset_y: Option<f64>,
}

impl<'a> StackedBarChart<'a> {
    #[must_use]
    pub const fn new(model: &'a ChartModel) -> Self {
        let (margin_left, category_font) = category_metrics(model.narrow);
        Self {
            model,
            margin_left,
            category_font,
            offset_y: None,
        }
    }

    /// Render as a nested `<svg>` placed at `y` in a larger document.
    #[must_use]
    pub const fn nested_at(mut self, y: f64) -> Self {
        self.offset_y = Some(y);
        self
    }

    fn builder(&self, height: f64) -> SvgBuilder {
        let builder = SvgBuilder::new(WIDTH, height)
            .with_title(&self.model.title)
            .with_class("salary-chart");
        match self.offset_y {
            Some(y) => builder.nested_at(y),
            None => builder,
        }
    }

    fn plot_width(&self) -> f64 {
        WIDTH - self.margin_left - MARGIN_RIGHT
    }

    #[allow(clippy::cast_precision_loss)]
    fn category_height(&self) -> f64 {
        let stacks = self.model.companies.len().max(1) as f64;
        stacks.mul_add(BAR_HEIGHT + BAR_GAP, CATEGORY_PADDING * 2.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn plot_height(&self) -> f64 {
        self.model.categories.len().max(1) as f64 * self.category_height()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn legend_columns(&self) -> usize {
        ((self.plot_width() / LEGEND_ITEM_WIDTH).floor() as usize).max(1)
    }

    #[allow(clippy::cast_precision_loss)]
    fn legend_height(&self) -> f64 {
        let rows = self.model.legend.len().div_ceil(self.legend_columns());
        rows as f64 * LEGEND_ROW_HEIGHT
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        WIDTH
    }

    /// Total height of the rendered document.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.model.is_empty() {
            return EMPTY_HEIGHT;
        }
        MARGIN_TOP + self.plot_height() + AXIS_HEIGHT + self.legend_height()
    }

    fn x_for(&self, value: f64) -> f64 {
        (value / self.model.domain_max).mul_add(self.plot_width(), self.margin_left)
    }

    fn render_grid(&self) -> Vec<String> {
        let bottom = MARGIN_TOP + self.plot_height();
        self.model
            .ticks
            .iter()
            .map(|tick| {
                let x = self.x_for(tick.value);
                GridLine::new((x, MARGIN_TOP), (x, bottom)).render()
            })
            .collect()
    }

    fn render_axes(&self) -> Vec<String> {
        let plot_height = self.plot_height();
        let value_axis =
            Axis::horizontal(self.margin_left, MARGIN_TOP + plot_height, self.plot_width())
                .with_labels(
                    self.model
                        .ticks
                        .iter()
                        .map(|tick| (tick.value / self.model.domain_max, tick.label.clone()))
                        .collect(),
                );

        #[allow(clippy::cast_precision_loss)]
        let count = self.model.categories.len().max(1) as f64;
        let category_axis = Axis::vertical(self.margin_left, MARGIN_TOP, plot_height)
            .with_font_size(self.category_font)
            .with_labels(
                self.model
                    .categories
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        #[allow(clippy::cast_precision_loss)]
                        let center = (i as f64 + 0.5) / count;
                        (center, row.position.clone())
                    })
                    .collect(),
            );

        vec![value_axis.render(), category_axis.render()]
    }

    fn render_stack(&self, stack: &CompanyStack, y: f64) -> String {
        let tooltip = stack.tooltip.to_string();
        let color = ChartColor::from(stack.color);
        let segments: Vec<String> = stack
            .segments
            .iter()
            .map(|segment| {
                let x = self.x_for(segment.start);
                Bar {
                    x,
                    y,
                    width: (self.x_for(segment.end) - x).max(0.0),
                    height: BAR_HEIGHT,
                    color: color.clone(),
                    opacity: segment.opacity,
                    tooltip: tooltip.clone(),
                }
                .render()
            })
            .collect();

        let mut group = format!(
            r#"<g class="stack" data-company="{}">"#,
            html_escape(&stack.company)
        );
        group.push('\n');
        for segment in segments {
            for line in segment.lines() {
                let _ = writeln!(group, "    {line}");
            }
        }
        group.push_str("</g>");
        group
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_category(&self, index: usize, row: &CategoryRow) -> Vec<String> {
        let top = (index as f64).mul_add(self.category_height(), MARGIN_TOP) + CATEGORY_PADDING;
        row.stacks
            .iter()
            .map(|stack| {
                let slot = self
                    .model
                    .companies
                    .iter()
                    .position(|key| *key == stack.company)
                    .unwrap_or(0);
                let y = (slot as f64).mul_add(BAR_HEIGHT + BAR_GAP, top);
                self.render_stack(stack, y)
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_legend_entry(&self, index: usize, entry: &LegendEntry) -> String {
        let columns = self.legend_columns();
        let x = ((index % columns) as f64).mul_add(LEGEND_ITEM_WIDTH, self.margin_left);
        let y = ((index / columns) as f64).mul_add(
            LEGEND_ROW_HEIGHT,
            MARGIN_TOP + self.plot_height() + AXIS_HEIGHT,
        );
        let fill = ChartColor::from(entry.color).fill_attrs(entry.opacity);
        let text_color = ChartColor::css_var("text").to_css();
        format!(
            r#"<g class="legend-item" data-company="{company}">
    <rect x="{x}" y="{y}" width="{size}" height="{size}" {fill}/>
    <text x="{tx}" y="{ty}" fill="{text_color}" font-size="11">{label}</text>
</g>"#,
            company = html_escape(&entry.company),
            x = coord(x),
            y = coord(y),
            size = coord(SWATCH_SIZE),
            tx = coord(x + SWATCH_SIZE + 4.0),
            ty = coord(y + SWATCH_SIZE - 2.0),
            label = html_escape(&entry.label),
        )
    }

    fn render_empty(&self) -> String {
        let text_color = ChartColor::css_var("text-muted").to_css();
        self.builder(EMPTY_HEIGHT)
            .push_raw(format!(
                r#"<text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No companies selected</text>"#,
                coord(WIDTH / 2.0),
                coord(EMPTY_HEIGHT / 2.0)
            ))
            .build()
    }
}

impl SvgElement for StackedBarChart<'_> {
    fn render(&self) -> String {
        if self.model.is_empty() {
            return self.render_empty();
        }

        let bars: Vec<String> = self
            .model
            .categories
            .iter()
            .enumerate()
            .flat_map(|(i, row)| self.render_category(i, row))
            .collect();
        let legend: Vec<String> = self
            .model
            .legend
            .iter()
            .enumerate()
            .map(|(i, entry)| self.render_legend_entry(i, entry))
            .collect();

        self.builder(self.height())
            .push_group(r#"class="grid""#, self.render_grid())
            .push_group(r#"class="axes""#, self.render_axes())
            .push_group(r#"class="bars""#, bars)
            .push_group(r#"class="legend""#, legend)
            .build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
