//! Admin role enumeration.

use serde::{Deserialize, Serialize};

/// Admin role with different permission levels.
///
/// Maps to the `admin_role` PostgreSQL enum. Which panel sections each role
/// may see is defined by [`crate::policy`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "admin_role", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access to all admin features including admin management.
    SuperAdmin,
    /// Manages posts and content.
    ContentAdmin,
    /// Views the analytics dashboard.
    AnalyticsAdmin,
    /// Manages social accounts and posts.
    SocialAdmin,
}

impl AdminRole {
    /// All roles, in display order.
    pub const ALL: [Self; 4] = [
        Self::SuperAdmin,
        Self::ContentAdmin,
        Self::AnalyticsAdmin,
        Self::SocialAdmin,
    ];

    /// Human-readable label, e.g. "Super Admin".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::ContentAdmin => "Content Admin",
            Self::AnalyticsAdmin => "Analytics Admin",
            Self::SocialAdmin => "Social Admin",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::ContentAdmin => write!(f, "content_admin"),
            Self::AnalyticsAdmin => write!(f, "analytics_admin"),
            Self::SocialAdmin => write!(f, "social_admin"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "content_admin" => Ok(Self::ContentAdmin),
            "analytics_admin" => Ok(Self::AnalyticsAdmin),
            "social_admin" => Ok(Self::SocialAdmin),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_from_str_roundtrip() {
        for role in AdminRole::ALL {
            let parsed: AdminRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("editor".parse::<AdminRole>().is_err());
        assert!("".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&AdminRole::AnalyticsAdmin).unwrap();
        assert_eq!(json, "\"analytics_admin\"");
    }
}
