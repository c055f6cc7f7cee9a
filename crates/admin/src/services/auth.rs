//! Authentication service.
//!
//! Email/password login against the `admins` directory, plus admin
//! provisioning through invites (the only open registration path).

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;
use thiserror::Error;

use brightwater_core::{AdminRole, Email, EmailError, UserId};

use crate::db::{AdminInviteRepository, AdminRepository, RepositoryError};
use crate::models::Admin;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 12;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email format is invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password does not meet requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// Email/password combination is wrong, or the account is disabled.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    #[error("account is deactivated")]
    AccountDisabled,

    /// An admin with this email already exists.
    #[error("admin already exists")]
    AdminAlreadyExists,

    /// The invite token is unknown, expired, or already used.
    #[error("invite is not valid")]
    InviteInvalid,

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Authentication service over the admin directory.
pub struct AuthService<'a> {
    admins: AdminRepository<'a>,
    invites: AdminInviteRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            admins: AdminRepository::new(pool),
            invites: AdminInviteRepository::new(pool),
        }
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    /// Returns `AuthError::AccountDisabled` if the password is right but the
    /// account has been deactivated.
    pub async fn login(&self, email: &str, password: &str) -> Result<Admin, AuthError> {
        let email = Email::parse(email)?;

        let (admin, password_hash) = self
            .admins
            .get_with_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        if !admin.is_active {
            return Err(AuthError::AccountDisabled);
        }

        Ok(admin)
    }

    /// Create an admin account from a valid invite token.
    ///
    /// The invite fixes both the email and the role; the new admin only
    /// chooses a password. The invite is consumed on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InviteInvalid` if the token is unknown, expired,
    /// or already used.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::AdminAlreadyExists` if the invited email already
    /// has an account.
    pub async fn register_from_invite(
        &self,
        token: &str,
        password: &str,
    ) -> Result<Admin, AuthError> {
        let invite = self
            .invites
            .get_valid_by_token(token)
            .await?
            .ok_or(AuthError::InviteInvalid)?;

        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let admin = self
            .admins
            .create(
                &invite.email,
                invite.role,
                UserId::generate(),
                &password_hash,
            )
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::AdminAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        self.invites.mark_used(token, admin.id).await?;

        Ok(admin)
    }

    /// Create an admin account directly, bypassing the invite flow.
    ///
    /// Used by the CLI to bootstrap the first super admin.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::AdminAlreadyExists` if the email is taken.
    pub async fn create_admin(
        &self,
        email: &str,
        role: AdminRole,
        password: &str,
    ) -> Result<Admin, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        self.admins
            .create(&email, role, UserId::generate(), &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::AdminAlreadyExists,
                other => AuthError::Repository(other),
            })
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).is_ok());
        assert!(verify_password("wrong password entirely", &hash).is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("correct horse battery staple").unwrap();
        let b = hash_password("correct horse battery staple").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_minimum_length_password_accepted() {
        assert!(validate_password(&"a".repeat(MIN_PASSWORD_LENGTH)).is_ok());
    }

    #[test]
    fn test_garbage_hash_is_invalid_credentials() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
