//! Integration tests for the `render` command.

mod common;

use common::{MYR_CONFIG, SMALL_DATASET, TestFixture};
use predicates::prelude::*;

// =============================================================================
// SVG output
// =============================================================================

#[test]
fn render_defaults_to_svg_of_every_track() {
    let fixture = TestFixture::new();

    let output = salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let svg = String::from_utf8(output).unwrap();

    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches(r#"class="salary-chart""#).count(), 2);
    assert!(svg.contains("Product Management Salary Ranges"));
    assert!(svg.contains("Engineering Salary Ranges"));
}

#[test]
fn render_single_track_has_tooltips_and_legend() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "--track", "engineering"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>"))
        .stdout(predicate::str::contains(r#"class="legend-item" data-company="gojek""#))
        .stdout(predicate::str::contains(r#"fill-opacity="0.4""#))
        .stdout(predicate::str::contains(r#"fill-opacity="0.8""#))
        .stdout(predicate::str::contains("Product Management").not());
}

#[test]
fn render_unknown_track_fails_with_config_error() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "--track", "marketing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("UnknownTrack"))
        .stderr(predicate::str::contains("salary-chart companies"));
}

#[test]
fn render_unknown_company_fails() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "--hide", "initech"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'initech' is not a company"));
}

#[test]
fn render_hide_and_only_conflict() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "--hide", "ovo", "--only", "grab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn render_hiding_everything_shows_empty_state() {
    let fixture = TestFixture::new();
    let data = fixture.create_file("data.toml", SMALL_DATASET);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "--data"])
        .arg(&data)
        .args(["--hide", "acme", "--hide", "globex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No companies selected"));
}

#[test]
fn render_writes_output_file() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "-f", "html", "-o", "dashboard.html"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fixture.read("dashboard.html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-track="engineering""#));
}

// =============================================================================
// Currency, country and notifications
// =============================================================================

#[test]
fn render_currency_change_notifies_on_stderr() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "--currency", "usd", "-f", "text"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Currency Updated: Displaying salaries in USD"))
        .stdout(predicate::str::contains("$"))
        .stdout(predicate::str::contains("1 IDR ≈ 0.000061 USD"));
}

#[test]
fn render_quiet_suppresses_notifications() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet", "render", "--currency", "eur", "-f", "text"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn render_country_filter_keeps_multi_country_companies() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "--country", "malaysia", "-f", "text"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Showing companies in Malaysia"))
        .stdout(predicate::str::contains("Grab (Singapore/Malaysia)"))
        .stdout(predicate::str::contains("Touch 'n Go (Malaysia)"))
        .stdout(predicate::str::contains("Gojek").not());
}

#[test]
fn render_text_shows_not_applicable_bands() {
    let fixture = TestFixture::new();
    let data = fixture.create_file("data.toml", SMALL_DATASET);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "render", "-f", "text", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Design Salary Ranges"))
        .stdout(predicate::str::contains("Rp 1,000,000 - Rp 2,000,000"))
        .stdout(predicate::str::contains("N/A - N/A"))
        .stdout(predicate::str::contains("Globex Corp (Singapore)"))
        .stdout(predicate::str::contains("* New joinee eligible for RSU/ESOP"))
        .stdout(predicate::str::contains("Conversion rate").not());
}

// =============================================================================
// Config interaction
// =============================================================================

#[test]
fn render_uses_discovered_config_silently() {
    let fixture = TestFixture::new();
    fixture.create_config(MYR_CONFIG);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["render", "-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Currency Updated").not())
        .stdout(predicate::str::contains(r#""currency": "MYR""#))
        .stdout(predicate::str::contains(r#""country_filter": "malaysia""#));
}

#[test]
fn render_flag_overrides_config() {
    let fixture = TestFixture::new();
    fixture.create_config(MYR_CONFIG);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["render", "-f", "json", "--currency", "IDR"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""currency": "IDR""#));
}

#[test]
fn render_config_data_path_is_relative_to_config() {
    let fixture = TestFixture::new();
    fixture.create_file("nested/data.toml", SMALL_DATASET);
    fixture.create_file("nested/settings.toml", "data = \"data.toml\"\n");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["render", "-c", "nested/settings.toml", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design Salary Ranges"));
}

#[test]
fn render_warns_about_unknown_hidden_company_in_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[display]\nhidden = [\"initech\"]\n");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["render", "-f", "text"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: display.hidden names unknown company 'initech'",
        ));
}

#[test]
fn render_verbose_reports_sources() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "-v", "render", "-f", "text"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config: defaults (no config file found)"))
        .stderr(predicate::str::contains("Dataset: 7 companies, 2 tracks, 11 positions"));
}
