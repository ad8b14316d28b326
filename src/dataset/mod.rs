//! Compensation data: bands per position, tracks, and the company registry.

mod loader;
mod model;

pub use loader::{BUILTIN_DATASET, builtin, load_dataset, parse_dataset, validate_dataset};
pub use model::{
    Company, CompanyRegistry, CompensationBand, Country, Dataset, PositionRow, Region, Track,
    capitalize,
};
