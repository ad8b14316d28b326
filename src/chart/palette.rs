//! Fixed company colors and segment opacities.

use crate::dataset::CompanyRegistry;

/// Series colors, assigned by a company's position in the registry.
pub const PALETTE: [&str; 10] = [
    "#3b82f6", "#ef4444", "#10b981", "#8b5cf6", "#f97316", "#ec4899", "#14b8a6", "#eab308",
    "#6366f1", "#84cc16",
];

/// Opacity of the upper (max) segment of a stack.
pub const MAX_OPACITY: f64 = 0.8;

/// Opacity of the lower (min) segment of a stack.
pub const MIN_OPACITY: f64 = 0.4;

/// Color for the company at `index` in canonical order. Wraps past the palette end.
#[must_use]
pub const fn color_for_index(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Color for a registered company, independent of which companies are visible.
#[must_use]
pub fn company_color(registry: &CompanyRegistry, key: &str) -> Option<&'static str> {
    registry.index_of(key).map(color_for_index)
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
