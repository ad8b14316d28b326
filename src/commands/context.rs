//! Shared setup for commands: config discovery, dataset selection, and
//! replaying CLI options onto the dashboard state.

use std::path::Path;

use crate::chart::{DashboardAction, DashboardState, Notification, VisibilityAction};
use crate::cli::{Cli, DataArgs, RenderArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::dataset::{Dataset, builtin, load_dataset};
use crate::output::{ColorMode, ErrorOutput};
use crate::{Result, SalaryChartError};

/// Everything loaded before a command does its work.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub loaded: LoadResult,
    pub dataset: Dataset,
}

impl CommandContext {
    /// Load config (unless `--no-config`) and the dataset it points at.
    ///
    /// # Errors
    /// Returns an error if the config or dataset cannot be read or is invalid.
    pub fn load(cli: &Cli, data: &DataArgs) -> Result<Self> {
        let loaded = load_config(data.config.as_deref(), cli.no_config)?;
        let dataset = select_dataset(data.data.as_deref(), &loaded.config)?;
        Ok(Self { loaded, dataset })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.loaded.config
    }

    /// `-v` summary of where settings and data came from.
    pub fn report_sources(&self, diag: &Diagnostics) {
        let source = self.loaded.source.as_ref().map_or_else(
            || "defaults (no config file found)".to_string(),
            |p| p.display().to_string(),
        );
        diag.verbose("Config", &source);
        diag.verbose(
            "Dataset",
            &format!(
                "{} companies, {} tracks, {} positions",
                self.dataset.companies.len(),
                self.dataset.tracks.len(),
                self.dataset.row_count()
            ),
        );
    }
}

/// Load configuration from an explicit path, by discovery, or not at all.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    path.map_or_else(|| loader.load(), |p| loader.load_from_path(p))
}

/// `--data` wins over the config's `data`; otherwise the built-in dataset.
///
/// # Errors
/// Returns an error if the chosen dataset cannot be read or fails validation.
pub fn select_dataset(data_override: Option<&Path>, config: &Config) -> Result<Dataset> {
    match data_override.or(config.data.as_deref()) {
        Some(path) => load_dataset(path),
        None => builtin(),
    }
}

/// Stderr diagnostics gated by `--quiet` and `-v`.
pub struct Diagnostics {
    output: ErrorOutput,
    quiet: bool,
    verbose: u8,
}

impl Diagnostics {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output: ErrorOutput::new(ColorMode::from(cli.color)),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }

    pub fn notify(&self, notification: &Notification) {
        if !self.quiet {
            self.output
                .print_info(&notification.title, &notification.description);
        }
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            self.output.print_warning(message);
        }
    }

    pub fn verbose(&self, title: &str, message: &str) {
        if !self.quiet && self.verbose > 0 {
            self.output.print_info(title, message);
        }
    }

    pub fn error(&self, err: &SalaryChartError) {
        self.output.print_error_with_detail(
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion(),
        );
    }
}

/// Actions that turn config defaults into the initial state. Their
/// notifications are not shown: config values are the baseline.
#[must_use]
pub fn config_actions(config: &Config, dataset: &Dataset) -> Vec<DashboardAction> {
    let mut actions = vec![
        DashboardAction::SetCurrency(config.display.currency),
        DashboardAction::SetCountry(config.display.country),
    ];
    for track in &dataset.tracks {
        for key in &config.display.hidden {
            actions.push(DashboardAction::Visibility {
                track: track.id.clone(),
                action: VisibilityAction::Hide(key.clone()),
            });
        }
    }
    actions
}

/// Actions for the render flags. The track argument selects the active tab;
/// `all` leaves the first track active.
///
/// # Errors
/// Returns an error if a flag names a track or company missing from the dataset.
pub fn render_actions(args: &RenderArgs, dataset: &Dataset) -> Result<Vec<DashboardAction>> {
    let mut actions = Vec::new();

    if let Some(currency) = args.currency {
        actions.push(DashboardAction::SetCurrency(currency));
    }
    if let Some(country) = args.country {
        actions.push(DashboardAction::SetCountry(country));
    }
    if !is_all_tracks(&args.track) {
        let track = dataset.require_track(&args.track)?;
        actions.push(DashboardAction::SelectTrack(track.id.clone()));
    }

    for key in args.hide.iter().chain(&args.only) {
        dataset.require_company(key)?;
    }
    // Hide goes last so it wins over Only for the same company.
    for track in &dataset.tracks {
        if !args.only.is_empty() {
            actions.push(DashboardAction::Visibility {
                track: track.id.clone(),
                action: VisibilityAction::Only(args.only.clone()),
            });
        }
        for key in &args.hide {
            actions.push(DashboardAction::Visibility {
                track: track.id.clone(),
                action: VisibilityAction::Hide(key.clone()),
            });
        }
    }

    Ok(actions)
}

#[must_use]
pub fn is_all_tracks(track: &str) -> bool {
    track.eq_ignore_ascii_case("all")
}

/// Apply `actions` in order, collecting the notifications they raise.
#[must_use]
pub fn replay(
    state: DashboardState,
    actions: impl IntoIterator<Item = DashboardAction>,
) -> (DashboardState, Vec<Notification>) {
    actions
        .into_iter()
        .fold((state, Vec::new()), |(state, mut notes), action| {
            let (next, note) = state.apply(action);
            notes.extend(note);
            (next, notes)
        })
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
