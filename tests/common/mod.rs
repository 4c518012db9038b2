//! Common test utilities

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated configuration directory
pub struct TestEnvironment {
    pub config_dir: TempDir,
    pub table_config_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp dir");
        let table_config_path = config_dir.path().join("carrier_table.toml");
        Self {
            config_dir,
            table_config_path,
        }
    }

    /// Write `contents` as the table config and return its path
    pub fn write_config(&self, contents: &str) -> &PathBuf {
        std::fs::write(&self.table_config_path, contents).expect("Failed to write config");
        &self.table_config_path
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
