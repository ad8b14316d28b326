//! Chart model: everything the renderers need, computed from the dataset and
//! the current display options.

use serde::Serialize;

use crate::currency::{Currency, format_salary};
use crate::dataset::{CompanyRegistry, CompensationBand, Track};

use super::palette::{MAX_OPACITY, MIN_OPACITY, company_color, color_for_index};
use super::tooltip::{Tooltip, tooltip_for};
use super::transform::{Bound, ChartRecord, field_name, transform};
use super::visibility::{CountryFilter, VisibilityMap, visible_companies};

/// Number of value-axis intervals to aim for.
const TARGET_TICKS: usize = 5;

/// Display options for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub currency: Currency,
    /// Multiplier from dataset amounts (IDR) to `currency`.
    pub conversion_rate: f64,
    pub country_filter: CountryFilter,
    pub visibility: VisibilityMap,
    /// Narrow viewport: tighter label margin and smaller category font.
    pub narrow: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency: Currency::Idr,
            conversion_rate: 1.0,
            country_filter: CountryFilter::All,
            visibility: VisibilityMap::default(),
            narrow: false,
        }
    }
}

/// One end of a company's band drawn as a horizontal span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub field: String,
    #[serde(skip)]
    pub bound: Bound,
    pub start: f64,
    pub end: f64,
    pub opacity: f64,
}

/// A company's stack group within one position: min then max segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyStack {
    pub company: String,
    pub color: &'static str,
    /// Band in the display currency.
    pub band: CompensationBand,
    pub segments: Vec<Segment>,
    pub tooltip: Tooltip,
}

/// One category-axis entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub position: String,
    pub stacks: Vec<CompanyStack>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub company: String,
    pub label: String,
    pub color: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Chart for one track, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub track_id: String,
    pub title: String,
    pub currency: Currency,
    /// Visible company keys in canonical order.
    pub companies: Vec<String>,
    pub categories: Vec<CategoryRow>,
    pub legend: Vec<LegendEntry>,
    pub ticks: Vec<Tick>,
    /// Upper end of the value axis.
    pub domain_max: f64,
    pub narrow: bool,
    pub records: Vec<ChartRecord>,
}

impl ChartModel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Build the chart model for `track`.
///
/// Output depends only on the arguments, so repeated calls with the same
/// inputs yield equal models.
#[must_use]
pub fn build_chart(
    track: &Track,
    registry: &CompanyRegistry,
    options: &RenderOptions,
) -> ChartModel {
    let records = transform(&track.rows, options.conversion_rate);
    let visible = visible_companies(registry, options.country_filter, &options.visibility);
    let companies: Vec<String> = visible.iter().map(|c| c.key.clone()).collect();

    let categories: Vec<CategoryRow> = records
        .iter()
        .map(|record| CategoryRow {
            position: record.position.clone(),
            stacks: companies
                .iter()
                .filter_map(|key| build_stack(record, key, registry, options.currency))
                .collect(),
        })
        .collect();

    let data_max = categories
        .iter()
        .flat_map(|row| row.stacks.iter())
        .filter_map(|stack| stack.band.upper())
        .fold(0.0_f64, f64::max);
    let tick_values = nice_ticks(data_max, TARGET_TICKS);
    let domain_max = tick_values.last().copied().unwrap_or(0.0).max(1.0);
    let ticks = tick_values
        .into_iter()
        .map(|value| Tick {
            value,
            label: axis_label(value, options.currency),
        })
        .collect();

    let legend = build_legend(&companies, registry);

    ChartModel {
        track_id: track.id.clone(),
        title: format!("{} Salary Ranges", track.title),
        currency: options.currency,
        companies,
        categories,
        legend,
        ticks,
        domain_max,
        narrow: options.narrow,
        records,
    }
}

fn build_stack(
    record: &ChartRecord,
    key: &str,
    registry: &CompanyRegistry,
    currency: Currency,
) -> Option<CompanyStack> {
    let band = record.band(key)?;
    let tooltip = tooltip_for(record, &field_name(key, Bound::Min), registry, currency)?;
    Some(CompanyStack {
        company: key.to_string(),
        color: company_color(registry, key).unwrap_or_else(|| color_for_index(0)),
        band: *band,
        segments: stack_segments(key, band),
        tooltip,
    })
}

/// Split a band into stacked spans: `0..min` for the min segment and
/// `min..max` for the max segment, so the whole bar ends at `max`.
#[must_use]
pub fn stack_segments(key: &str, band: &CompensationBand) -> Vec<Segment> {
    let segment = |bound: Bound, start: f64, end: f64| Segment {
        field: field_name(key, bound),
        bound,
        start,
        end,
        opacity: match bound {
            Bound::Min => MIN_OPACITY,
            Bound::Max => MAX_OPACITY,
        },
    };

    match (band.min, band.max) {
        (Some(min), Some(max)) => vec![
            segment(Bound::Min, 0.0, min),
            segment(Bound::Max, min, max.max(min)),
        ],
        (Some(min), None) => vec![segment(Bound::Min, 0.0, min)],
        (None, Some(max)) => vec![segment(Bound::Max, 0.0, max)],
        (None, None) => Vec::new(),
    }
}

/// Legend lists every visible company's max entry, then every min entry.
fn build_legend(companies: &[String], registry: &CompanyRegistry) -> Vec<LegendEntry> {
    [Bound::Max, Bound::Min]
        .into_iter()
        .flat_map(|bound| {
            companies.iter().filter_map(move |key| {
                let company = registry.get(key)?;
                Some(LegendEntry {
                    company: key.clone(),
                    label: format!("{} {}", company.name(), bound.label()),
                    color: company_color(registry, key)?,
                    opacity: match bound {
                        Bound::Min => MIN_OPACITY,
                        Bound::Max => MAX_OPACITY,
                    },
                })
            })
        })
        .collect()
}

/// Value-axis tick label. Zero is the not-applicable marker, so the origin
/// reads `N/A` like every other zero amount.
#[must_use]
pub fn axis_label(value: f64, currency: Currency) -> String {
    format_salary(value, currency, true)
}

/// Evenly spaced ticks from zero covering `max`, with a step of 1, 2, 2.5 or 5
/// times a power of ten.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn nice_ticks(max: f64, target: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 || target == 0 {
        return vec![0.0];
    }

    let raw_step = max / target as f64;
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 2.5 {
        2.5
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = factor * magnitude;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
