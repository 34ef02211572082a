//! Database seeding for the employee table.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;
use tracing::{error, info};

use crate::config::SeedConfig;
use crate::fixtures::EmployeeRecord;

const CREATE_FUNCIONARIOS: &str = r#"
CREATE TABLE IF NOT EXISTS Funcionarios (
    id INTEGER PRIMARY KEY,
    nome TEXT NOT NULL,
    cargo TEXT,
    salario REAL
)
"#;

const INSERT_FUNCIONARIO: &str = r#"
INSERT INTO Funcionarios (nome, cargo, salario)
VALUES (?1, ?2, ?3)
"#;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Employee name must not be empty")]
    MissingName,
    #[error("Insert task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A row successfully inserted, with its engine-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedRow {
    pub name: String,
    pub id: i64,
}

/// A row that failed to insert. Failures are independent; sibling rows
/// are still attempted.
#[derive(Debug)]
pub struct FailedRow {
    pub name: String,
    pub error: SeedError,
}

/// Per-row outcomes of a seeding run.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub inserted: Vec<InsertedRow>,
    pub failures: Vec<FailedRow>,
}

impl SeedSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Database seeder for the employee table.
///
/// Owns the connection pool for the duration of a run. The pool is
/// closed exactly once, through [`Seeder::close`], on every exit path
/// of [`run`].
pub struct Seeder {
    pool: SqlitePool,
}

impl Seeder {
    /// Opens the database file, creating it if absent.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let options = SqliteConnectOptions::new()
            .filename(&config.db_path)
            .create_if_missing(true);

        // SQLite allows a single writer; one connection is enough.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!("Connected to database at {}", config.db_path.display());
        Ok(Self { pool })
    }

    /// Ensures the `Funcionarios` table exists.
    ///
    /// Safe to call any number of times; a pre-existing matching table
    /// is not an error.
    pub async fn ensure_schema(&self) -> Result<(), SeedError> {
        sqlx::query(CREATE_FUNCIONARIOS).execute(&self.pool).await?;

        info!("Funcionarios table ready");
        Ok(())
    }

    /// Inserts one employee with a parameterized statement and returns
    /// the generated row id.
    pub async fn insert_employee(&self, employee: &EmployeeRecord) -> Result<i64, SeedError> {
        insert_row(&self.pool, employee).await
    }

    /// Issues all inserts as spawned tasks, then awaits every completion
    /// before returning.
    ///
    /// Row failures are independent: a failed insert is recorded in the
    /// summary and does not abort sibling inserts. The awaited join
    /// point guarantees no insert is still in flight when the caller
    /// goes on to close the pool.
    pub async fn seed_employees(&self, employees: &[EmployeeRecord]) -> SeedSummary {
        info!("Seeding {} employees...", employees.len());

        let mut handles = Vec::with_capacity(employees.len());
        for employee in employees {
            let pool = self.pool.clone();
            let record = employee.clone();
            handles.push(tokio::spawn(
                async move { insert_row(&pool, &record).await },
            ));
        }

        let mut summary = SeedSummary::default();
        for (employee, handle) in employees.iter().zip(handles) {
            let outcome = match handle.await {
                Ok(result) => result,
                Err(e) => Err(SeedError::Join(e)),
            };
            match outcome {
                Ok(id) => {
                    info!("Inserted employee '{}' (id {})", employee.name, id);
                    summary.inserted.push(InsertedRow {
                        name: employee.name.clone(),
                        id,
                    });
                }
                Err(e) => {
                    error!("Failed to insert employee '{}': {e}", employee.name);
                    summary.failures.push(FailedRow {
                        name: employee.name.clone(),
                        error: e,
                    });
                }
            }
        }

        info!(
            "Seeded {} employees ({} failed)",
            summary.inserted.len(),
            summary.failures.len()
        );
        summary
    }

    /// Closes the pool and logs the outcome once.
    pub async fn close(self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn insert_row(pool: &SqlitePool, employee: &EmployeeRecord) -> Result<i64, SeedError> {
    if employee.name.trim().is_empty() {
        return Err(SeedError::MissingName);
    }

    let result = sqlx::query(INSERT_FUNCIONARIO)
        .bind(&employee.name)
        .bind(employee.role.as_deref())
        .bind(employee.salary)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Runs one full seeding pass: connect, ensure schema, insert the
/// configured dataset, close.
///
/// Schema failure halts the run before any insert is attempted, since
/// the inserts depend on the table existing. The pool is closed on that
/// path too, not only on success.
pub async fn run(config: &SeedConfig) -> Result<SeedSummary, SeedError> {
    let seeder = Seeder::connect(config).await?;

    if let Err(e) = seeder.ensure_schema().await {
        error!("Failed to create Funcionarios table: {e}");
        seeder.close().await;
        return Err(e);
    }

    let summary = seeder.seed_employees(&config.employees).await;
    seeder.close().await;

    Ok(summary)
}
