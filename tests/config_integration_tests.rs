//! Integration tests for the `config` command.

mod common;

use common::{MYR_CONFIG, SMALL_DATASET, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Config Validate Tests
// =============================================================================

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config(MYR_CONFIG);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", MYR_CONFIG);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--config", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("[display\ncurrency = ");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TomlParse"));
}

#[test]
fn config_validate_unknown_currency() {
    let fixture = TestFixture::new();
    fixture.create_config("[display]\ncurrency = \"GBP\"\n");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("GBP"));
}

#[test]
fn config_validate_negative_rate() {
    let fixture = TestFixture::new();
    fixture.create_config("[rates]\nMYR = -1.0\n");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("rates.MYR must be a positive number"));
}

#[test]
fn config_validate_checks_dataset_and_hidden_companies() {
    let fixture = TestFixture::new();
    fixture.create_file("data.toml", SMALL_DATASET);
    fixture.create_config("data = \"data.toml\"\n\n[display]\nhidden = [\"gojek\"]\n");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'gojek' is not a company"));
}

// =============================================================================
// Config Show Tests
// =============================================================================

#[test]
fn config_show_text() {
    let fixture = TestFixture::new();
    fixture.create_config(MYR_CONFIG);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Effective Configuration ==="))
        .stdout(predicate::str::contains("currency = \"MYR\""))
        .stdout(predicate::str::contains("country = \"malaysia\""));
}

#[test]
fn config_show_json() {
    let fixture = TestFixture::new();
    fixture.create_config(MYR_CONFIG);

    let output = salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["display"]["currency"], "MYR");
    assert_eq!(parsed["rates"]["USD"], 0.000061);
}

#[test]
fn config_show_no_config_uses_defaults() {
    let fixture = TestFixture::new();
    fixture.create_config(MYR_CONFIG);

    salary_chart!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source = (defaults)"))
        .stdout(predicate::str::contains("currency = \"IDR\""));
}
