//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::services::{CredentialCipher, EmailService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    credential_cipher: CredentialCipher,
    email: Option<EmailService>,
}

impl AppState {
    /// Build application state from configuration and a database pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP relay cannot be configured.
    pub fn new(
        config: AdminConfig,
        pool: PgPool,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let credential_cipher = CredentialCipher::new(&config.credential_key);
        let email = match config.email() {
            Some(email_config) => Some(EmailService::new(email_config)?),
            None => None,
        };

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                credential_cipher,
                email,
            }),
        })
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Cipher for social account access tokens.
    #[must_use]
    pub fn credential_cipher(&self) -> &CredentialCipher {
        &self.inner.credential_cipher
    }

    /// Email service, if SMTP is configured.
    #[must_use]
    pub fn email(&self) -> Option<&EmailService> {
        self.inner.email.as_ref()
    }
}
