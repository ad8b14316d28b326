//! Dashboard state as immutable snapshots and the actions that move between them.

use indexmap::IndexMap;

use crate::currency::Currency;
use crate::dataset::Dataset;

use super::visibility::{CountryFilter, VisibilityAction, VisibilityMap};

/// A short user-facing message raised by a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

/// Every user-adjustable setting of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub currency: Currency,
    pub country_filter: CountryFilter,
    pub active_track: String,
    /// Per-track company toggles; each tab keeps its own.
    pub visibility: IndexMap<String, VisibilityMap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SetCurrency(Currency),
    SetCountry(CountryFilter),
    SelectTrack(String),
    Visibility {
        track: String,
        action: VisibilityAction,
    },
}

impl DashboardState {
    /// Initial state: IDR, all countries, first track active, every company shown.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        let all_shown = VisibilityMap::all_shown(&dataset.companies);
        Self {
            currency: Currency::default(),
            country_filter: CountryFilter::All,
            active_track: dataset
                .tracks
                .first()
                .map(|t| t.id.clone())
                .unwrap_or_default(),
            visibility: dataset
                .tracks
                .iter()
                .map(|t| (t.id.clone(), all_shown.clone()))
                .collect(),
        }
    }

    /// Toggles for `track`, all shown if the track has none recorded.
    #[must_use]
    pub fn visibility_for(&self, track: &str) -> VisibilityMap {
        self.visibility.get(track).cloned().unwrap_or_default()
    }

    /// Produce the next state. Currency and country changes that actually
    /// change the value raise a notification.
    #[must_use]
    pub fn apply(&self, action: DashboardAction) -> (Self, Option<Notification>) {
        let mut next = self.clone();
        let notification = match action {
            DashboardAction::SetCurrency(currency) => {
                next.currency = currency;
                (currency != self.currency).then(|| Notification {
                    title: "Currency Updated".to_string(),
                    description: format!("Displaying salaries in {currency}"),
                })
            }
            DashboardAction::SetCountry(filter) => {
                next.country_filter = filter;
                (filter != self.country_filter).then(|| Notification {
                    title: "Country Filter Updated".to_string(),
                    description: match filter {
                        CountryFilter::All => "Showing companies in all countries".to_string(),
                        CountryFilter::Only(country) => format!("Showing companies in {country}"),
                    },
                })
            }
            DashboardAction::SelectTrack(track) => {
                next.active_track = track;
                None
            }
            DashboardAction::Visibility { track, action } => {
                let updated = self.visibility_for(&track).apply(&action);
                next.visibility.insert(track, updated);
                None
            }
        };
        (next, notification)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
