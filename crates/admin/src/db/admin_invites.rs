//! Admin invite repository.
//!
//! Manages the tokenized invites that gate admin registration.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use sqlx::PgPool;
use uuid::Uuid;

use brightwater_core::{AdminId, AdminInviteId, AdminRole, Email};

use super::{RepositoryError, map_unique_violation};
use crate::models::AdminInvite;

/// Length of generated invite tokens.
const INVITE_TOKEN_LENGTH: usize = 40;

/// Internal row type for database queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminInviteRow {
    id: Uuid,
    email: String,
    role: AdminRole,
    token: String,
    invited_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    used_at: Option<DateTime<Utc>>,
    used_by: Option<Uuid>,
}

const INVITE_COLUMNS: &str =
    "id, email, role, token, invited_by, created_at, expires_at, used_at, used_by";

impl TryFrom<AdminInviteRow> for AdminInvite {
    type Error = RepositoryError;

    fn try_from(row: AdminInviteRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminInviteId::new(row.id),
            email,
            role: row.role,
            token: row.token,
            invited_by: row.invited_by.map(AdminId::new),
            created_at: row.created_at,
            expires_at: row.expires_at,
            used_at: row.used_at,
            used_by: row.used_by.map(AdminId::new),
        })
    }
}

/// Repository for admin invite database operations.
pub struct AdminInviteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminInviteRepository<'a> {
    /// Create a new invite repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all invites (pending and used), newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<AdminInvite>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminInviteRow>(&format!(
            "SELECT {INVITE_COLUMNS} FROM admin_invites ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a valid (unused, unexpired) invite by its URL token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_valid_by_token(
        &self,
        token: &str,
    ) -> Result<Option<AdminInvite>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminInviteRow>(&format!(
            "SELECT {INVITE_COLUMNS} FROM admin_invites
             WHERE token = $1 AND used_at IS NULL AND expires_at > NOW()"
        ))
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new invite with a freshly generated token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if an unused invite already exists
    /// for this email.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        role: AdminRole,
        invited_by: Option<AdminId>,
        expires_in_days: i32,
    ) -> Result<AdminInvite, RepositoryError> {
        let token = generate_invite_token();

        let row = sqlx::query_as::<_, AdminInviteRow>(&format!(
            "INSERT INTO admin_invites (email, role, token, invited_by, expires_at)
             VALUES ($1, $2, $3, $4, NOW() + make_interval(days => $5))
             RETURNING {INVITE_COLUMNS}"
        ))
        .bind(email.as_str())
        .bind(role)
        .bind(&token)
        .bind(invited_by)
        .bind(expires_in_days)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "invite already exists for this email"))?;

        row.try_into()
    }

    /// Mark an invite as used by a newly created admin.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the invite doesn't exist or was
    /// already used.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn mark_used(&self, token: &str, used_by: AdminId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE admin_invites SET used_at = NOW(), used_by = $1
             WHERE token = $2 AND used_at IS NULL",
        )
        .bind(used_by)
        .bind(token)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete expired invites (cleanup).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_expired(&self) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM admin_invites WHERE used_at IS NULL AND expires_at < NOW()")
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}

/// Generate a random alphanumeric invite token.
fn generate_invite_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(INVITE_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_token_format() {
        let token = generate_invite_token();
        assert_eq!(token.len(), INVITE_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_invite_tokens_are_unique() {
        assert_ne!(generate_invite_token(), generate_invite_token());
    }
}
