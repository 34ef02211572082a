//! Seeds the example employee database.
//!
//! Run with:
//! ```
//! cargo run --bin seed
//! ```

use funcionarios_seed::{SeedConfig, db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::default();
    let summary = db::run(&config).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Inserted: {}", summary.inserted.len());
    tracing::info!("  Failed:   {}", summary.failures.len());

    if summary.has_failures() {
        anyhow::bail!(
            "{} employee row(s) failed to insert",
            summary.failures.len()
        );
    }

    Ok(())
}
