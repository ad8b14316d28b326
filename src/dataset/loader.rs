use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, SalaryChartError};

use super::model::{Company, CompanyRegistry, Dataset, Region, Track};

/// Dataset shipped inside the binary. Amounts are monthly IDR.
pub const BUILTIN_DATASET: &str = include_str!("../../data/salaries.toml");

/// On-disk dataset layout.
///
/// ```toml
/// [companies.tiket]
/// country = "Indonesia"
///
/// [[tracks]]
/// id = "product-management"
/// title = "Product Management"
///
/// [[tracks.rows]]
/// position = "Associate PM"
/// tiket = { min = 6000000, max = 14950000 }
/// ```
#[derive(Debug, Clone, Deserialize)]
struct DatasetFile {
    companies: IndexMap<String, CompanyEntry>,
    #[serde(default)]
    tracks: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompanyEntry {
    country: Region,
    #[serde(default)]
    display_name: Option<String>,
}

/// Parse the built-in dataset.
///
/// # Errors
/// Only fails if the embedded data is malformed.
pub fn builtin() -> Result<Dataset> {
    parse_dataset(BUILTIN_DATASET)
}

/// Read and validate a dataset file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or fails validation.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path).map_err(|source| SalaryChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&content)
}

/// Parse and validate dataset TOML.
///
/// # Errors
/// Returns an error if the TOML is malformed or the dataset fails validation.
pub fn parse_dataset(content: &str) -> Result<Dataset> {
    let file: DatasetFile = toml::from_str(content)?;

    let companies: CompanyRegistry = file
        .companies
        .into_iter()
        .map(|(key, entry)| Company {
            key,
            display_name: entry.display_name,
            region: entry.country,
        })
        .collect();

    let dataset = Dataset {
        companies,
        tracks: file.tracks,
    };
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Check the structural invariants the renderer relies on.
///
/// # Errors
/// Returns `InvalidDataset` describing the first violation found.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    if dataset.companies.is_empty() {
        return Err(SalaryChartError::InvalidDataset(
            "dataset defines no companies".to_string(),
        ));
    }
    if dataset.tracks.is_empty() {
        return Err(SalaryChartError::InvalidDataset(
            "dataset defines no tracks".to_string(),
        ));
    }

    let mut track_ids = Vec::with_capacity(dataset.tracks.len());
    for track in &dataset.tracks {
        if track_ids.contains(&track.id.as_str()) {
            return Err(SalaryChartError::InvalidDataset(format!(
                "duplicate track id '{}'",
                track.id
            )));
        }
        track_ids.push(track.id.as_str());
        validate_track(track, &dataset.companies)?;
    }
    Ok(())
}

fn validate_track(track: &Track, companies: &CompanyRegistry) -> Result<()> {
    if track.rows.is_empty() {
        return Err(SalaryChartError::InvalidDataset(format!(
            "track '{}' has no positions",
            track.id
        )));
    }

    let mut positions = Vec::with_capacity(track.rows.len());
    for row in &track.rows {
        if positions.contains(&row.position.as_str()) {
            return Err(SalaryChartError::InvalidDataset(format!(
                "track '{}' lists position '{}' twice",
                track.id, row.position
            )));
        }
        positions.push(row.position.as_str());

        if let Some(missing) = companies.keys().find(|key| !row.bands.contains_key(*key)) {
            return Err(SalaryChartError::InvalidDataset(format!(
                "track '{}', position '{}': no band for company '{missing}' (use min = 0, max = 0 for N/A)",
                track.id, row.position
            )));
        }

        for (company, band) in &row.bands {
            if !companies.contains(company) {
                return Err(SalaryChartError::InvalidDataset(format!(
                    "track '{}', position '{}': company '{company}' is not declared in [companies]",
                    track.id, row.position
                )));
            }
            let negative = band.min.is_some_and(|v| v < 0.0) || band.max.is_some_and(|v| v < 0.0);
            if negative || !band.is_ordered() {
                return Err(SalaryChartError::InvalidDataset(format!(
                    "track '{}', position '{}': band for '{company}' must satisfy 0 <= min <= max",
                    track.id, row.position
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
