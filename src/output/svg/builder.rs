//! SVG document builder: root element, accessible title, grouped content.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{coord, html_escape};

/// Builder for a standalone `<svg>` document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    class: Option<String>,
    offset_y: Option<f64>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            class: None,
            offset_y: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub const fn resize(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Place the document at `y` inside an enclosing `<svg>`.
    #[must_use]
    pub const fn nested_at(mut self, y: f64) -> Self {
        self.offset_y = Some(y);
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    /// Wrap already-rendered children in a `<g>` carrying `attrs`.
    #[must_use]
    pub fn push_group(mut self, attrs: &str, children: Vec<String>) -> Self {
        let mut group = format!("<g {attrs}>\n");
        for child in children {
            for line in child.lines() {
                let _ = writeln!(group, "    {line}");
            }
        }
        group.push_str("</g>");
        self.elements.push(group);
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let class = self
            .class
            .map(|c| format!(r#" class="{}""#, html_escape(&c)))
            .unwrap_or_default();
        let placement = self
            .offset_y
            .map(|y| {
                format!(
                    r#"x="0" y="{}" width="{}" height="{}" "#,
                    coord(y),
                    coord(self.width),
                    coord(self.height)
                )
            })
            .unwrap_or_default();
        let _ = writeln!(
            output,
            r#"<svg {placement}viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img"{class}>"#,
            coord(self.width),
            coord(self.height)
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
