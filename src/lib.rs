pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod error;
pub mod output;

pub use error::{Result, SalaryChartError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
