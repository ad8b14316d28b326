//! Compensation dataset types.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SalaryChartError;

// ============================================================================
// Compensation bands
// ============================================================================

/// A min/max pay range for one position at one company.
///
/// Either bound may be absent, meaning "not applicable" for that company.
/// Data files mark an absent bound with `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawBand", into = "RawBand")]
pub struct CompensationBand {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl CompensationBand {
    /// Band with neither bound applicable.
    pub const NOT_APPLICABLE: Self = Self {
        min: None,
        max: None,
    };

    /// Build a band from raw amounts. A zero bound is read as not applicable.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: present(min),
            max: present(max),
        }
    }

    /// Whether at least one bound carries an amount.
    #[must_use]
    pub const fn is_applicable(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// `max >= min` whenever both bounds are present.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => max >= min,
            _ => true,
        }
    }

    /// Multiply each present bound by `rate`.
    #[must_use]
    pub fn scaled(&self, rate: f64) -> Self {
        Self {
            min: self.min.map(|v| v * rate),
            max: self.max.map(|v| v * rate),
        }
    }

    /// Largest present bound, used for axis scaling.
    #[must_use]
    pub fn upper(&self) -> Option<f64> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(min.max(max)),
            (min, max) => min.or(max),
        }
    }
}

fn present(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}

/// On-disk band shape: plain numbers with `0` for "not applicable".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct RawBand {
    #[serde(default)]
    min: f64,
    #[serde(default)]
    max: f64,
}

impl From<RawBand> for CompensationBand {
    fn from(raw: RawBand) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl From<CompensationBand> for RawBand {
    fn from(band: CompensationBand) -> Self {
        Self {
            min: band.min.unwrap_or(0.0),
            max: band.max.unwrap_or(0.0),
        }
    }
}

// ============================================================================
// Countries and companies
// ============================================================================

/// A country that can be selected in the country filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Indonesia,
    Malaysia,
    Singapore,
}

impl Country {
    pub const ALL: [Self; 3] = [Self::Indonesia, Self::Malaysia, Self::Singapore];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Indonesia => "Indonesia",
            Self::Malaysia => "Malaysia",
            Self::Singapore => "Singapore",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = SalaryChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SalaryChartError::UnknownCountry(s.to_string()))
    }
}

/// Where a company is based, as shown in tooltips.
///
/// A company operating in more than one market carries a combined label and
/// matches each of its countries in the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    Indonesia,
    Malaysia,
    Singapore,
    SingaporeMalaysia,
}

impl Region {
    pub const ALL: [Self; 4] = [
        Self::Indonesia,
        Self::Malaysia,
        Self::Singapore,
        Self::SingaporeMalaysia,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Indonesia => "Indonesia",
            Self::Malaysia => "Malaysia",
            Self::Singapore => "Singapore",
            Self::SingaporeMalaysia => "Singapore/Malaysia",
        }
    }

    #[must_use]
    pub const fn countries(self) -> &'static [Country] {
        match self {
            Self::Indonesia => &[Country::Indonesia],
            Self::Malaysia => &[Country::Malaysia],
            Self::Singapore => &[Country::Singapore],
            Self::SingaporeMalaysia => &[Country::Singapore, Country::Malaysia],
        }
    }

    #[must_use]
    pub fn covers(self, country: Country) -> bool {
        self.countries().contains(&country)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = SalaryChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(' ', "");
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| SalaryChartError::UnknownCountry(s.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = SalaryChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(value: Region) -> Self {
        value.label().to_string()
    }
}

/// A company whose bands appear in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub region: Region,
}

impl Company {
    #[must_use]
    pub fn new(key: impl Into<String>, region: Region) -> Self {
        Self {
            key: key.into(),
            display_name: None,
            region,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Name shown in legends and tooltips.
    ///
    /// Regional variants such as `grab_my` cannot be split into words by
    /// capitalization alone, so they rely on an explicit `display_name`.
    #[must_use]
    pub fn name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| capitalize(&self.key))
    }
}

/// Upper-case the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Companies in canonical order. The order fixes each company's chart color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRegistry {
    companies: IndexMap<String, Company>,
}

impl CompanyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a company at the end of the canonical order. Re-inserting a key
    /// replaces its entry without moving it.
    pub fn insert(&mut self, company: Company) {
        self.companies.insert(company.key.clone(), company);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Company> {
        self.companies.get(key)
    }

    /// Position of `key` in the canonical ordering.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.companies.get_index_of(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.companies.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.companies.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl FromIterator<Company> for CompanyRegistry {
    fn from_iter<T: IntoIterator<Item = Company>>(iter: T) -> Self {
        let mut registry = Self::new();
        for company in iter {
            registry.insert(company);
        }
        registry
    }
}

// ============================================================================
// Positions and tracks
// ============================================================================

/// Bands for one job level, keyed by company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRow {
    pub position: String,
    #[serde(flatten)]
    pub bands: IndexMap<String, CompensationBand>,
}

impl PositionRow {
    #[must_use]
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            bands: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_band(mut self, company: impl Into<String>, band: CompensationBand) -> Self {
        self.bands.insert(company.into(), band);
        self
    }

    #[must_use]
    pub fn band(&self, company: &str) -> Option<&CompensationBand> {
        self.bands.get(company)
    }
}

/// A job family with its positions in seniority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub rows: Vec<PositionRow>,
}

/// Tracks plus the company registry they reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub companies: CompanyRegistry,
    pub tracks: Vec<Track>,
}

impl Dataset {
    #[must_use]
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Look up a track, failing with the list of known ids.
    ///
    /// # Errors
    /// Returns `UnknownTrack` if no track has this id.
    pub fn require_track(&self, id: &str) -> crate::Result<&Track> {
        self.track(id)
            .ok_or_else(|| SalaryChartError::UnknownTrack(id.to_string()))
    }

    /// # Errors
    /// Returns `UnknownCompany` if the key is not registered.
    pub fn require_company(&self, key: &str) -> crate::Result<&Company> {
        self.companies
            .get(key)
            .ok_or_else(|| SalaryChartError::UnknownCompany(key.to_string()))
    }

    /// Total number of position rows across all tracks.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.tracks.iter().map(|t| t.rows.len()).sum()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
