//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use brightwater_core::{AdminId, AdminRole, Email, UserId};

use super::Admin;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
/// This is a cache only: every request re-checks the `admins` table for
/// an active row, so a deactivated admin is locked out mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's directory row ID.
    pub id: AdminId,
    /// Identity reference used for directory lookups.
    pub user_id: UserId,
    /// Admin's email address.
    pub email: Email,
    /// Admin's role at login time (refreshed on each request).
    pub role: AdminRole,
}

impl From<&Admin> for CurrentAdmin {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            user_id: admin.user_id,
            email: admin.email.clone(),
            role: admin.role,
        }
    }
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
