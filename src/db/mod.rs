//! Database integration for the seeding run.
//!
//! The [`Seeder`] owns the SQLite pool and provides schema setup and
//! parameterized inserts; [`run`] drives one full pass over a
//! [`SeedConfig`](crate::config::SeedConfig).

mod seeder;

pub use seeder::{FailedRow, InsertedRow, SeedError, SeedSummary, Seeder, run};
