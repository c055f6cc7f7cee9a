//! Social account repository.
//!
//! Access tokens are stored as AES-256-GCM ciphertext and never leave
//! the table through list queries.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use brightwater_core::{AdminId, SocialAccountId, SocialPlatform};

use super::{RepositoryError, map_unique_violation};
use crate::models::{NewSocialAccount, SocialAccount};

/// Internal row type for `PostgreSQL` social account queries.
///
/// Deliberately excludes the encrypted token columns.
#[derive(Debug, sqlx::FromRow)]
struct SocialAccountRow {
    id: Uuid,
    platform: SocialPlatform,
    account_name: String,
    account_id: String,
    is_active: bool,
    added_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const ACCOUNT_COLUMNS: &str =
    "id, platform, account_name, account_id, is_active, added_by, created_at, updated_at";

impl From<SocialAccountRow> for SocialAccount {
    fn from(row: SocialAccountRow) -> Self {
        Self {
            id: SocialAccountId::new(row.id),
            platform: row.platform,
            account_name: row.account_name,
            account_id: row.account_id,
            is_active: row.is_active,
            added_by: row.added_by.map(AdminId::new),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for social account database operations.
pub struct SocialAccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SocialAccountRepository<'a> {
    /// Create a new social account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<SocialAccount>, RepositoryError> {
        let rows = sqlx::query_as::<_, SocialAccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM social_accounts ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count active accounts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_active(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM social_accounts WHERE is_active = TRUE",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Connect a new account, returning the created row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the platform/account pair is
    /// already connected.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        account: &NewSocialAccount,
    ) -> Result<SocialAccount, RepositoryError> {
        let row = sqlx::query_as::<_, SocialAccountRow>(&format!(
            "INSERT INTO social_accounts
                 (platform, account_name, account_id, access_token_encrypted, added_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(account.platform)
        .bind(&account.account_name)
        .bind(&account.account_id)
        .bind(account.access_token_encrypted.as_deref())
        .bind(account.added_by)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "account already connected"))?;

        Ok(row.into())
    }

    /// Flip an account's active flag, returning the updated row.
    ///
    /// The toggle happens in SQL so concurrent toggles cannot lose an
    /// intermediate state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn toggle_active(
        &self,
        id: SocialAccountId,
    ) -> Result<SocialAccount, RepositoryError> {
        let row = sqlx::query_as::<_, SocialAccountRow>(&format!(
            "UPDATE social_accounts SET is_active = NOT is_active, updated_at = NOW()
             WHERE id = $1
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Permanently delete an account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: SocialAccountId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM social_accounts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Fetch the encrypted access token for an account.
    ///
    /// Only the publishing path needs this; list views never see tokens.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn get_encrypted_token(
        &self,
        id: SocialAccountId,
    ) -> Result<Option<String>, RepositoryError> {
        let token = sqlx::query_scalar::<_, Option<String>>(
            "SELECT access_token_encrypted FROM social_accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(token)
    }
}
