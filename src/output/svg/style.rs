//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Fill or stroke color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#3b82f6")
    Hex(String),
    /// CSS variable reference (e.g., "text-muted" → "var(--color-text-muted)")
    CssVar(String),
}

impl ChartColor {
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }

    /// `fill` plus `fill-opacity` attributes; opacity 1 is omitted.
    #[must_use]
    pub fn fill_attrs(&self, opacity: f64) -> String {
        if (opacity - 1.0).abs() < f64::EPSILON {
            format!(r#"fill="{}""#, self.to_css())
        } else {
            format!(r#"fill="{}" fill-opacity="{opacity}""#, self.to_css())
        }
    }
}

impl From<&str> for ChartColor {
    fn from(value: &str) -> Self {
        if value.starts_with('#') {
            Self::hex(value)
        } else {
            Self::css_var(value)
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
