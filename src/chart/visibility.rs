//! Company visibility: per-company toggles combined with the country filter.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::{Company, CompanyRegistry, Country, Region};
use crate::error::SalaryChartError;

/// Restricts the chart to companies based in one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountryFilter {
    #[default]
    All,
    Only(Country),
}

impl CountryFilter {
    /// Whether a company mapped to `region` passes the filter.
    #[must_use]
    pub fn admits(self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Only(country) => region.covers(country),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All countries",
            Self::Only(country) => country.name(),
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(country) => write!(f, "{}", country.name().to_lowercase()),
        }
    }
}

impl FromStr for CountryFilter {
    type Err = SalaryChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for CountryFilter {
    type Error = SalaryChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryFilter> for String {
    fn from(value: CountryFilter) -> Self {
        value.to_string()
    }
}

/// A change to the per-company toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityAction {
    Toggle(String),
    Show(String),
    Hide(String),
    /// Show exactly these companies and hide the rest.
    Only(Vec<String>),
    ShowAll,
    HideAll,
}

/// Snapshot of which companies the user has toggled on.
///
/// Companies missing from the map follow `default_shown`, which starts out
/// `true` and is flipped by the bulk actions (`Only`, `ShowAll`, `HideAll`).
/// Snapshots are never mutated in place; [`VisibilityMap::apply`] returns
/// the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityMap {
    shown: IndexMap<String, bool>,
    #[serde(skip)]
    default_shown: bool,
}

impl Default for VisibilityMap {
    fn default() -> Self {
        Self {
            shown: IndexMap::new(),
            default_shown: true,
        }
    }
}

impl VisibilityMap {
    /// Every registered company shown.
    #[must_use]
    pub fn all_shown(registry: &CompanyRegistry) -> Self {
        Self {
            shown: registry.keys().map(|k| (k.to_string(), true)).collect(),
            default_shown: true,
        }
    }

    #[must_use]
    pub fn is_shown(&self, key: &str) -> bool {
        self.shown.get(key).copied().unwrap_or(self.default_shown)
    }

    /// Keys explicitly toggled off, in insertion order.
    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.shown
            .iter()
            .filter(|(_, shown)| !**shown)
            .map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn apply(&self, action: &VisibilityAction) -> Self {
        let mut next = self.clone();
        match action {
            VisibilityAction::Toggle(key) => {
                let current = next.is_shown(key);
                next.shown.insert(key.clone(), !current);
            }
            VisibilityAction::Show(key) => {
                next.shown.insert(key.clone(), true);
            }
            VisibilityAction::Hide(key) => {
                next.shown.insert(key.clone(), false);
            }
            VisibilityAction::Only(keys) => {
                next.default_shown = false;
                for (key, shown) in &mut next.shown {
                    *shown = keys.contains(key);
                }
                for key in keys {
                    next.shown.entry(key.clone()).or_insert(true);
                }
            }
            VisibilityAction::ShowAll => next.set_all(true),
            VisibilityAction::HideAll => next.set_all(false),
        }
        next
    }

    fn set_all(&mut self, shown: bool) {
        self.default_shown = shown;
        self.shown.values_mut().for_each(|s| *s = shown);
    }
}

/// Companies to draw, in canonical order: toggled on AND admitted by the country filter.
#[must_use]
pub fn visible_companies<'a>(
    registry: &'a CompanyRegistry,
    filter: CountryFilter,
    visibility: &VisibilityMap,
) -> Vec<&'a Company> {
    registry
        .iter()
        .filter(|c| filter.admits(c.region) && visibility.is_shown(&c.key))
        .collect()
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
