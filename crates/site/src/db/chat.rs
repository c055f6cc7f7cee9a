//! Repository for the `chat_history` table.
//!
//! Visitor messages from the contact widget land here, paired with the
//! canned acknowledgement row (`is_bot = true`) so the conversation
//! reads back in order.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::RepositoryError;

/// One row of `chat_history`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub message: String,
    pub user_email: Option<String>,
    pub user_id: Option<Uuid>,
    pub is_bot: bool,
    pub created_at: DateTime<Utc>,
}

const CHAT_COLUMNS: &str = "id, message, user_email, user_id, is_bot, created_at";

/// Repository for contact widget messages.
pub struct ChatRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ChatRepository<'a> {
    /// Create a new repository with the given pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a message a visitor left through the contact form.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` on database errors.
    pub async fn record_visitor_message(
        &self,
        message: &str,
        user_email: Option<&str>,
    ) -> Result<ChatMessage, RepositoryError> {
        let row = sqlx::query_as::<_, ChatMessage>(&format!(
            "INSERT INTO chat_history (message, user_email, is_bot)
             VALUES ($1, $2, FALSE)
             RETURNING {CHAT_COLUMNS}"
        ))
        .bind(message)
        .bind(user_email)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Store the canned acknowledgement that follows a visitor message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` on database errors.
    pub async fn record_bot_reply(&self, message: &str) -> Result<ChatMessage, RepositoryError> {
        let row = sqlx::query_as::<_, ChatMessage>(&format!(
            "INSERT INTO chat_history (message, is_bot)
             VALUES ($1, TRUE)
             RETURNING {CHAT_COLUMNS}"
        ))
        .bind(message)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
