//! Dataset rows to currency-scaled chart records.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dataset::{CompensationBand, PositionRow};

pub const MIN_SUFFIX: &str = "_min";
pub const MAX_SUFFIX: &str = "_max";

/// Which end of a band a chart field refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Min => MIN_SUFFIX,
            Self::Max => MAX_SUFFIX,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Min => "Min",
            Self::Max => "Max",
        }
    }
}

/// Field name for one end of a company's band, e.g. `tiket_min`.
#[must_use]
pub fn field_name(company: &str, bound: Bound) -> String {
    format!("{company}{}", bound.suffix())
}

/// Split a field name into its company key and bound.
///
/// Only the trailing suffix is removed, so keys that contain underscores
/// (`grab_my_max`) resolve to the full key.
#[must_use]
pub fn split_field(field: &str) -> Option<(&str, Bound)> {
    if let Some(company) = field.strip_suffix(MIN_SUFFIX) {
        return Some((company, Bound::Min));
    }
    field
        .strip_suffix(MAX_SUFFIX)
        .map(|company| (company, Bound::Max))
}

/// One position's bands after currency conversion.
///
/// Serializes to the flat `{position, tiket_min, tiket_max, ...}` shape;
/// absent bounds serialize as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    pub position: String,
    pub bands: IndexMap<String, CompensationBand>,
}

impl ChartRecord {
    /// Value of a flat field such as `tiket_max`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<f64> {
        let (company, bound) = split_field(name)?;
        let band = self.bands.get(company)?;
        match bound {
            Bound::Min => band.min,
            Bound::Max => band.max,
        }
    }

    #[must_use]
    pub fn band(&self, company: &str) -> Option<&CompensationBand> {
        self.bands.get(company)
    }
}

impl Serialize for ChartRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.bands.len() * 2))?;
        map.serialize_entry("position", &self.position)?;
        for (company, band) in &self.bands {
            map.serialize_entry(&field_name(company, Bound::Min), &band.min)?;
            map.serialize_entry(&field_name(company, Bound::Max), &band.max)?;
        }
        map.end()
    }
}

/// Scale every band of every row by `conversion_rate`, keeping row and company order.
#[must_use]
pub fn transform(rows: &[PositionRow], conversion_rate: f64) -> Vec<ChartRecord> {
    rows.iter()
        .map(|row| ChartRecord {
            position: row.position.clone(),
            bands: row
                .bands
                .iter()
                .map(|(company, band)| (company.clone(), band.scaled(conversion_rate)))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
