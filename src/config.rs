//! Configuration for seeding runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fixtures::{EmployeeRecord, default_employees};

/// Configuration for a seeding run.
///
/// The default reproduces the original bootstrap: the `exemplo.db` file
/// in the working directory and the four fixture employees. Tests inject
/// their own path and dataset instead of touching the seeder itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to the SQLite database file. Created if absent.
    pub db_path: PathBuf,

    /// Employee records to insert, in issue order.
    pub employees: Vec<EmployeeRecord>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("exemplo.db"),
            employees: default_employees(),
        }
    }
}

impl SeedConfig {
    /// Returns a config targeting `path` with the default dataset.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
            ..Self::default()
        }
    }
}
