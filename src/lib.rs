//! Database bootstrap for the example employee directory.
//!
//! Opens a file-backed SQLite database (creating it if absent), ensures
//! the `Funcionarios` table exists, inserts a fixed dataset of employee
//! records, and closes the connection. One linear pass, no ongoing
//! service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use funcionarios_seed::{SeedConfig, db};
//!
//! let summary = db::run(&SeedConfig::default()).await?;
//! for row in &summary.inserted {
//!     println!("{} -> id {}", row.name, row.id);
//! }
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub use config::SeedConfig;
pub use db::{SeedError, SeedSummary, Seeder, run};
pub use fixtures::{EmployeeRecord, default_employees};
