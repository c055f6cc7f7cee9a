//! Admin directory repository.
//!
//! The `admins` table is the authority on who may use the back office.
//! Session state only caches an identity; every authenticated request
//! goes back through [`AdminRepository::get_active_by_user_id`].

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use brightwater_core::{AdminId, AdminRole, Email, UserId};

use super::{RepositoryError, map_unique_violation};
use crate::models::Admin;

/// Internal row type for `PostgreSQL` admin queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: Uuid,
    user_id: Uuid,
    email: String,
    role: AdminRole,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const ADMIN_COLUMNS: &str = "id, user_id, email, role, is_active, created_at, updated_at";

impl TryFrom<AdminRow> for Admin {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminId::new(row.id),
            user_id: UserId::new(row.user_id),
            email,
            role: row.role,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for admin directory operations.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all admins, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<Admin>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admins ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an admin by their directory row ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admins WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get the active admin row for an identity, if one exists.
    ///
    /// This is the per-request authorization lookup: deactivated and
    /// unknown identities both come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_active_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admins WHERE user_id = $1 AND is_active = TRUE"
        ))
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an admin by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admins WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an admin and their password hash for login verification.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Admin, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct AdminWithHashRow {
            #[sqlx(flatten)]
            admin: AdminRow,
            password_hash: String,
        }

        let row = sqlx::query_as::<_, AdminWithHashRow>(&format!(
            "SELECT {ADMIN_COLUMNS}, password_hash FROM admins WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(|r| Ok((Admin::try_from(r.admin)?, r.password_hash)))
            .transpose()
    }

    /// Create a new admin.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        role: AdminRole,
        user_id: UserId,
        password_hash: &str,
    ) -> Result<Admin, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "INSERT INTO admins (email, role, user_id, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {ADMIN_COLUMNS}"
        ))
        .bind(email.as_str())
        .bind(role)
        .bind(user_id)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email already exists"))?;

        row.try_into()
    }

    /// Update an admin's role, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the admin doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_role(
        &self,
        id: AdminId,
        role: AdminRole,
    ) -> Result<Admin, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "UPDATE admins SET role = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {ADMIN_COLUMNS}"
        ))
        .bind(role)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Set an admin's active flag, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the admin doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_active(&self, id: AdminId, is_active: bool) -> Result<Admin, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "UPDATE admins SET is_active = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {ADMIN_COLUMNS}"
        ))
        .bind(is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Count admins by role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_by_role(&self, role: AdminRole) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins WHERE role = $1")
            .bind(role)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
