//! Primitive SVG elements: axes, bar segments, and grid lines.

use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    /// Value axis along the bottom, labels under the ticks.
    Horizontal,
    /// Category axis along the left, labels right-aligned before the ticks.
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis with ticks and labels.
///
/// Label positions are fractions of `length`: 0.0 is the axis origin
/// (left end for horizontal axes, top end for vertical ones).
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    /// Vertical axis running downward from (`x`, `y`).
    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::css_var("text-muted"),
            tick_length: 5.0,
            font_size: 11.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y + self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
            coord(self.x),
            coord(self.y),
            coord(end_x),
            coord(end_y)
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                coord(tick.start_x),
                coord(tick.start_y),
                coord(tick.end_x),
                coord(tick.end_y)
            );

            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                coord(tick.label_x),
                coord(tick.label_y),
                tick.anchor,
                self.font_size
            );
        }

        output
    }
}

/// One segment of a stacked bar, with its hover text.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub opacity: f64,
    /// Shown by viewers as a tooltip and read by screen readers.
    pub tooltip: String,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let fill = self.color.fill_attrs(self.opacity);
        let escaped_tooltip = html_escape(&self.tooltip);
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {fill}>
    <title>{escaped_tooltip}</title>
</rect>"#,
            coord(self.x),
            coord(self.y),
            coord(self.width),
            coord(self.height)
        )
    }
}

/// Straight grid line, dashed by default.
#[derive(Debug, Clone)]
pub struct GridLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: ChartColor,
    pub dash: Option<&'static str>,
}

impl GridLine {
    #[must_use]
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            from,
            to,
            color: ChartColor::css_var("grid"),
            dash: Some("3 3"),
        }
    }

    #[must_use]
    pub const fn solid(mut self) -> Self {
        self.dash = None;
        self
    }
}

impl SvgElement for GridLine {
    fn render(&self) -> String {
        let dash = self
            .dash
            .map(|d| format!(r#" stroke-dasharray="{d}""#))
            .unwrap_or_default();
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"{dash}/>"#,
            coord(self.from.0),
            coord(self.from.1),
            coord(self.to.0),
            coord(self.to.1),
            self.color.to_css()
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
