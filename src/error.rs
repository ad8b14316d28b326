use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalaryChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Unknown track: {0}")]
    UnknownTrack(String),

    #[error("Unknown company: {0}")]
    UnknownCompany(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

impl SalaryChartError {
    /// Short category name used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::TomlSerialize(_) => "TomlSerialize",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::UnknownCurrency(_) => "UnknownCurrency",
            Self::UnknownCountry(_) => "UnknownCountry",
            Self::UnknownTrack(_) => "UnknownTrack",
            Self::UnknownCompany(_) => "UnknownCompany",
            Self::InvalidDataset(_) => "InvalidDataset",
        }
    }

    /// Message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::InvalidDataset(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("Failed to read {}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::TomlSerialize(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::UnknownCurrency(code) => format!("'{code}' is not a supported currency"),
            Self::UnknownCountry(name) => format!("'{name}' is not a known country"),
            Self::UnknownTrack(id) => format!("'{id}' is not a track in the dataset"),
            Self::UnknownCompany(key) => format!("'{key}' is not a company in the dataset"),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e
                .span()
                .map(|span| format!("at bytes {}..{}", span.start, span.end)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownCurrency(_) => Some("Supported currencies: IDR, MYR, USD, EUR"),
            Self::UnknownCountry(_) => Some("Use one of: all, indonesia, malaysia, singapore"),
            Self::UnknownTrack(_) | Self::UnknownCompany(_) => {
                Some("Run `salary-chart companies` to list the dataset contents")
            }
            Self::Config(_) => Some("Run `salary-chart config validate` to check the file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SalaryChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
