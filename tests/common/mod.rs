#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the salary-chart binary.
#[macro_export]
macro_rules! salary_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("salary-chart"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.salary-chart.toml` in the fixture root.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".salary-chart.toml", content)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

/// Two companies, one track, one N/A band.
pub const SMALL_DATASET: &str = r#"
[companies.acme]
country = "Indonesia"

[companies.globex]
country = "Singapore"
display_name = "Globex Corp"

[[tracks]]
id = "design"
title = "Design"

[[tracks.rows]]
position = "Designer"
acme = { min = 1_000_000, max = 2_000_000 }
globex = { min = 3_000_000, max = 5_000_000 }

[[tracks.rows]]
position = "Design Lead"
acme = { min = 0, max = 0 }
globex = { min = 6_000_000, max = 9_000_000 }
"#;

pub const MYR_CONFIG: &str = r#"
[display]
currency = "MYR"
country = "malaysia"
"#;
