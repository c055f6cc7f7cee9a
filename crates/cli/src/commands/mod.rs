//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// A command precondition is not met.
    #[error("{0}")]
    Precondition(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Invalid role string.
    #[error("Invalid role: {0}. Valid roles: super_admin, content_admin, analytics_admin, social_admin")]
    InvalidRole(String),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] brightwater_core::EmailError),

    /// Admin service error.
    #[error("Auth error: {0}")]
    Auth(#[from] brightwater_admin::services::AuthError),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] brightwater_admin::db::RepositoryError),
}

/// Connect to the admin database using `ADMIN_DATABASE_URL` (or `DATABASE_URL`).
pub(crate) async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = brightwater_admin::db::create_pool(&database_url).await?;
    Ok(pool)
}
