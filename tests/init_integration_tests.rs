//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".salary-chart.toml");
    assert!(content.contains("[display]"));
    assert!(content.contains("[rates]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("custom-config.toml");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["init", "--output"])
        .arg(&custom_path)
        .assert()
        .success();

    assert!(custom_path.exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fixture.read(".salary-chart.toml"), "# existing config\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    salary_chart!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".salary-chart.toml").contains("[display]"));
}

#[test]
fn init_output_passes_validation() {
    let fixture = TestFixture::new();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    salary_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
