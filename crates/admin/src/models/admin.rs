//! Admin account and invite models.

use chrono::{DateTime, Utc};

use brightwater_core::policy::{self, PanelSection};
use brightwater_core::{AdminId, AdminInviteId, AdminRole, Email, UserId};

/// A back-office staff account.
///
/// The password hash is deliberately not part of this type; it only
/// surfaces inside the auth service during login.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Unique identifier of the directory row.
    pub id: AdminId,
    /// Identity reference used by sessions and foreign keys.
    pub user_id: UserId,
    /// Email address (unique).
    pub email: Email,
    /// Role determining panel access.
    pub role: AdminRole,
    /// Deactivated admins keep their row but cannot sign in.
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Panel sections this admin may view, in tab order.
    #[must_use]
    pub fn sections(&self) -> &'static [PanelSection] {
        policy::sections_for(self.role)
    }

    /// Whether this admin may view `section`.
    #[must_use]
    pub fn can_access(&self, section: PanelSection) -> bool {
        policy::can_access(self.role, section)
    }
}

/// A tokenized invite that gates admin registration.
///
/// Registration is closed: a new admin can only sign up through an
/// unexpired, unused invite link issued by a super admin or the CLI.
#[derive(Debug, Clone)]
pub struct AdminInvite {
    /// Unique identifier.
    pub id: AdminInviteId,
    /// Email address the invite was issued to.
    pub email: Email,
    /// Role to assign when the invite is used.
    pub role: AdminRole,
    /// Opaque URL token carried in the signup link.
    pub token: String,
    /// Admin who created this invite (None for CLI-created).
    pub invited_by: Option<AdminId>,
    /// When the invite was created.
    pub created_at: DateTime<Utc>,
    /// When the invite expires.
    pub expires_at: DateTime<Utc>,
    /// When the invite was used (None if unused).
    pub used_at: Option<DateTime<Utc>>,
    /// Admin created when the invite was used.
    pub used_by: Option<AdminId>,
}

impl AdminInvite {
    /// Returns true if this invite has already been used.
    #[must_use]
    pub const fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    /// Returns true if this invite has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Returns true if this invite can still be used.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_used() && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invite(expires_at: DateTime<Utc>, used_at: Option<DateTime<Utc>>) -> AdminInvite {
        AdminInvite {
            id: AdminInviteId::generate(),
            email: Email::parse("new-staff@example.org").expect("valid email"),
            role: AdminRole::ContentAdmin,
            token: "tok".to_string(),
            invited_by: None,
            created_at: Utc::now(),
            expires_at,
            used_at,
            used_by: None,
        }
    }

    #[test]
    fn test_fresh_invite_is_valid() {
        let invite = invite(Utc::now() + chrono::Duration::days(7), None);
        assert!(invite.is_valid());
        assert!(!invite.is_used());
        assert!(!invite.is_expired());
    }

    #[test]
    fn test_expired_invite_is_invalid() {
        let invite = invite(Utc::now() - chrono::Duration::hours(1), None);
        assert!(invite.is_expired());
        assert!(!invite.is_valid());
    }

    #[test]
    fn test_used_invite_is_invalid() {
        let invite = invite(Utc::now() + chrono::Duration::days(7), Some(Utc::now()));
        assert!(invite.is_used());
        assert!(!invite.is_valid());
    }
}
