//! Social account models.

use chrono::{DateTime, Utc};

use brightwater_core::{AdminId, SocialAccountId, SocialPlatform};

/// A connected social media account.
///
/// Access tokens stay encrypted in the database and are never loaded
/// into this type; handlers that need the plaintext go through
/// [`crate::services::credentials`].
#[derive(Debug, Clone)]
pub struct SocialAccount {
    /// Unique identifier.
    pub id: SocialAccountId,
    /// Which platform the account lives on.
    pub platform: SocialPlatform,
    /// Display name, e.g. "@brightwater".
    pub account_name: String,
    /// Platform-side account identifier.
    pub account_id: String,
    /// Inactive accounts are kept but excluded from publishing.
    pub is_active: bool,
    /// Admin who connected the account (None if that admin was removed).
    pub added_by: Option<AdminId>,
    /// When the account was connected.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for connecting a new social account.
#[derive(Debug)]
pub struct NewSocialAccount {
    pub platform: SocialPlatform,
    pub account_name: String,
    pub account_id: String,
    /// AES-256-GCM ciphertext, base64-encoded. Produced by
    /// [`crate::services::credentials::CredentialCipher::encrypt`].
    pub access_token_encrypted: Option<String>,
    pub added_by: Option<AdminId>,
}
