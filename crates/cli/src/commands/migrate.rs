//! Database migration command.
//!
//! Migrations are embedded at compile time from `crates/admin/migrations`
//! and cover the whole schema: the admin directory, invites, social
//! accounts, posts, engagement snapshots, the contact widget table, and
//! session storage. Both binaries share the one database.

use super::{CliError, connect};

/// Run all pending migrations.
pub async fn run() -> Result<(), CliError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
