//! Shared test infrastructure for grocer integration tests.
//!
//! Provides TestEnv helper for consistent test setup/teardown.

#![allow(dead_code)]

use grocer::{Category, Inventory, Item};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with automatic cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path for a database file inside the temp directory.
    pub fn db_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a database file with the given contents and return its path.
    pub fn write_db(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.db_path(name);
        fs::write(&path, contents).expect("Failed to write database file");
        path
    }

    /// Read a database file back as text.
    pub fn read_db(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read database file")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an item from its category code.
pub fn item(id: u32, name: &str, cost: f64, code: char) -> Item {
    Item {
        id,
        name: name.to_string(),
        cost,
        category: Category::from_code(code).expect("Unknown category code"),
    }
}

/// Inventory with a handful of records, as if freshly loaded.
pub fn sample_inventory() -> Inventory {
    Inventory::from_items(vec![
        item(1, "Apples", 0.99, 'P'),
        item(2, "Milk", 2.50, 'D'),
        item(3, "Tuna", 1.25, 'C'),
    ])
    .expect("Failed to build sample inventory")
}
