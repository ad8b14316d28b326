use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::chart::CountryFilter;
use crate::currency::Currency;
use crate::dataset::Country;

fn dataset() -> Dataset {
    builtin().unwrap()
}

fn render_args(extra: &[&str]) -> RenderArgs {
    let argv = ["salary-chart", "render"].into_iter().chain(extra.iter().copied());
    match Cli::parse_from(argv).command {
        crate::cli::Commands::Render(args) => args,
        other => panic!("expected render command, got {other:?}"),
    }
}

const SMALL_DATASET: &str = r#"
[companies.acme]
country = "Indonesia"

[[tracks]]
id = "design"
title = "Design"

[[tracks.rows]]
position = "Designer"
acme = { min = 1000, max = 2000 }
"#;

// =============================================================================
// Config and dataset loading
// =============================================================================

#[test]
fn load_config_no_config_returns_default() {
    let loaded = load_config(None, true).unwrap();
    assert_eq!(loaded.config, Config::default());
    assert!(loaded.source.is_none());
}

#[test]
fn load_config_no_config_ignores_explicit_path() {
    let loaded = load_config(Some(Path::new("does-not-exist.toml")), true).unwrap();
    assert!(loaded.source.is_none());
}

#[test]
fn load_config_explicit_missing_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let result = load_config(Some(&path), false);
    assert!(matches!(result, Err(SalaryChartError::FileRead { .. })));
}

#[test]
fn load_config_explicit_path_reads_display_section() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "[display]\ncurrency = \"USD\"\nnarrow = true\n").unwrap();

    let loaded = load_config(Some(&path), false).unwrap();
    assert_eq!(loaded.config.display.currency, Currency::Usd);
    assert!(loaded.config.display.narrow);
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
}

#[test]
fn select_dataset_defaults_to_builtin() {
    let selected = select_dataset(None, &Config::default()).unwrap();
    assert_eq!(selected, dataset());
}

#[test]
fn select_dataset_uses_config_data_path() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("design.toml");
    std::fs::write(&data_path, SMALL_DATASET).unwrap();

    let config = Config {
        data: Some(data_path),
        ..Config::default()
    };
    let selected = select_dataset(None, &config).unwrap();
    assert_eq!(selected.tracks.len(), 1);
    assert!(selected.companies.contains("acme"));
}

#[test]
fn select_dataset_override_wins_over_config() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("design.toml");
    std::fs::write(&data_path, SMALL_DATASET).unwrap();

    let config = Config {
        data: Some(temp_dir.path().join("missing.toml")),
        ..Config::default()
    };
    let selected = select_dataset(Some(&data_path), &config).unwrap();
    assert_eq!(selected.tracks[0].id, "design");
}

#[test]
fn select_dataset_missing_file_fails() {
    let result = select_dataset(Some(Path::new("no/such/data.toml")), &Config::default());
    assert!(matches!(result, Err(SalaryChartError::FileRead { .. })));
}

// =============================================================================
// Action replay
// =============================================================================

#[test]
fn config_actions_apply_display_defaults_silently_per_track() {
    let mut config = Config::default();
    config.display.currency = Currency::Eur;
    config.display.country = CountryFilter::Only(Country::Singapore);
    config.display.hidden = vec!["ovo".to_string()];
    let data = dataset();

    let actions = config_actions(&config, &data);
    // currency, country, then one hide per track
    assert_eq!(actions.len(), 2 + data.tracks.len());

    let (state, _) = replay(DashboardState::new(&data), actions);
    assert_eq!(state.currency, Currency::Eur);
    assert_eq!(state.country_filter, CountryFilter::Only(Country::Singapore));
    for track in &data.tracks {
        assert!(!state.visibility_for(&track.id).is_shown("ovo"));
    }
}

#[test]
fn render_actions_default_args_are_empty() {
    let actions = render_actions(&render_args(&[]), &dataset()).unwrap();
    assert!(actions.is_empty());
}

#[test]
fn render_actions_select_named_track() {
    let actions = render_actions(&render_args(&["--track", "engineering"]), &dataset()).unwrap();
    assert_eq!(
        actions,
        vec![DashboardAction::SelectTrack("engineering".to_string())]
    );
}

#[test]
fn render_actions_unknown_track_fails() {
    let result = render_actions(&render_args(&["--track", "design"]), &dataset());
    assert!(matches!(result, Err(SalaryChartError::UnknownTrack(id)) if id == "design"));
}

#[test]
fn render_actions_unknown_company_fails() {
    let result = render_actions(&render_args(&["--hide", "acme"]), &dataset());
    assert!(matches!(result, Err(SalaryChartError::UnknownCompany(key)) if key == "acme"));

    let result = render_actions(&render_args(&["--only", "acme"]), &dataset());
    assert!(matches!(result, Err(SalaryChartError::UnknownCompany(_))));
}

#[test]
fn render_actions_only_shows_exactly_the_listed_companies() {
    let data = dataset();
    let actions =
        render_actions(&render_args(&["--only", "grab", "--only", "shopee"]), &data).unwrap();
    let (state, _) = replay(DashboardState::new(&data), actions);

    let visibility = state.visibility_for("engineering");
    assert!(visibility.is_shown("grab"));
    assert!(visibility.is_shown("shopee"));
    assert_eq!(visibility.hidden().count(), data.companies.len() - 2);
}

#[test]
fn render_actions_hide_wins_over_only() {
    let data = dataset();
    let mut args = render_args(&["--only", "tiket", "--only", "grab"]);
    args.hide = vec!["tiket".to_string()];
    let (state, _) = replay(DashboardState::new(&data), render_actions(&args, &data).unwrap());

    let visibility = state.visibility_for("engineering");
    assert!(!visibility.is_shown("tiket"));
    assert!(visibility.is_shown("grab"));
    assert_eq!(visibility.hidden().count(), data.companies.len() - 1);
}

#[test]
fn replay_collects_notifications_for_changes() {
    let data = dataset();
    let actions =
        render_actions(&render_args(&["--currency", "myr", "--country", "malaysia"]), &data)
            .unwrap();
    let (state, notes) = replay(DashboardState::new(&data), actions);

    assert_eq!(state.currency, Currency::Myr);
    let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Currency Updated", "Country Filter Updated"]);
}

#[test]
fn replay_after_config_baseline_skips_unchanged_values() {
    let data = dataset();
    let mut config = Config::default();
    config.display.currency = Currency::Myr;

    let (baseline, _) = replay(DashboardState::new(&data), config_actions(&config, &data));
    let actions = render_actions(&render_args(&["--currency", "MYR"]), &data).unwrap();
    let (_, notes) = replay(baseline, actions);
    assert!(notes.is_empty());
}

#[test]
fn all_tracks_keyword_is_case_insensitive() {
    assert!(is_all_tracks("all"));
    assert!(is_all_tracks("ALL"));
    assert!(!is_all_tracks("engineering"));
}
