use std::fmt::Write;

use serde::Serialize;

use crate::chart::company_color;
use crate::cli::{Cli, CompaniesArgs, ListFormat};
use crate::dataset::Dataset;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{CommandContext, Diagnostics};

/// One company as listed by `salary-chart companies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyListing {
    pub key: String,
    pub name: String,
    pub country: String,
    pub color: String,
}

#[must_use]
pub fn run_companies(args: &CompaniesArgs, cli: &Cli) -> i32 {
    let diag = Diagnostics::from_cli(cli);
    match run_companies_impl(args, cli, &diag) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            diag.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// List the dataset's companies in canonical (color) order.
///
/// # Errors
/// Returns an error if the config or dataset cannot be loaded.
pub fn run_companies_impl(args: &CompaniesArgs, cli: &Cli, diag: &Diagnostics) -> Result<String> {
    let ctx = CommandContext::load(cli, &args.data)?;
    ctx.report_sources(diag);

    let listings = list_companies(&ctx.dataset);
    match args.format {
        ListFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&listings)?)),
        ListFormat::Text => Ok(format_companies_text(&listings, &ctx.dataset)),
    }
}

#[must_use]
pub fn list_companies(dataset: &Dataset) -> Vec<CompanyListing> {
    dataset
        .companies
        .iter()
        .map(|company| CompanyListing {
            key: company.key.clone(),
            name: company.name(),
            country: company.region.to_string(),
            color: company_color(&dataset.companies, &company.key)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

#[must_use]
pub fn format_companies_text(listings: &[CompanyListing], dataset: &Dataset) -> String {
    let key_width = listings.iter().map(|l| l.key.len()).max().unwrap_or(0).max(3);
    let name_width = listings
        .iter()
        .map(|l| l.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let country_width = listings
        .iter()
        .map(|l| l.country.len())
        .max()
        .unwrap_or(0)
        .max(7);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<key_width$}  {:<name_width$}  {:<country_width$}  COLOR",
        "KEY", "NAME", "COUNTRY"
    );
    for listing in listings {
        let _ = writeln!(
            output,
            "{:<key_width$}  {:<name_width$}  {:<country_width$}  {}",
            listing.key, listing.name, listing.country, listing.color
        );
    }

    let tracks: Vec<_> = dataset.tracks.iter().map(|t| t.id.as_str()).collect();
    let _ = writeln!(output, "\nTracks: {}", tracks.join(", "));
    output
}

#[cfg(test)]
#[path = "companies_tests.rs"]
mod tests;
