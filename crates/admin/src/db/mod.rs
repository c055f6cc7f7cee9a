//! Database operations for the admin `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `admins` - Back-office staff accounts and their roles
//! - `admin_invites` - Tokenized invites that gate admin registration
//! - `social_accounts` - Connected social media accounts (tokens encrypted)
//! - `posts` - Drafted and scheduled social posts
//! - `post_analytics` - Per-post engagement snapshots
//! - `chat_history` - Contact widget messages from the public site
//! - `sessions` - tower-sessions storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p brightwater-cli -- migrate
//! ```

pub mod admin_invites;
pub mod admins;
pub mod post_analytics;
pub mod posts;
pub mod social_accounts;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admin_invites::AdminInviteRepository;
pub use admins::AdminRepository;
pub use post_analytics::PostAnalyticsRepository;
pub use posts::PostRepository;
pub use social_accounts::SocialAccountRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a sqlx unique violation to `RepositoryError::Conflict`.
fn map_unique_violation(e: sqlx::Error, message: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(message.to_owned());
    }
    RepositoryError::Database(e)
}
