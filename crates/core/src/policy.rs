//! Role-based access policy for the admin panel.
//!
//! Pure functions mapping an [`AdminRole`] to the panel sections it may
//! view. All authorization decisions in the admin panel go through this
//! module; nothing here performs I/O.
//!
//! | Section    | Roles                                    |
//! |------------|------------------------------------------|
//! | Dashboard  | all active admins                        |
//! | Social     | super_admin, social_admin                |
//! | Posts      | super_admin, content_admin, social_admin |
//! | Analytics  | super_admin, analytics_admin             |
//! | Admins     | super_admin                              |

use crate::types::AdminRole;

/// A section (tab) of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSection {
    /// Overview statistics; visible to every active admin.
    Dashboard,
    /// Social media account management.
    Social,
    /// Post drafting and scheduling.
    Posts,
    /// Engagement analytics.
    Analytics,
    /// Admin user management.
    Admins,
}

impl PanelSection {
    /// All sections, in tab order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Social,
        Self::Posts,
        Self::Analytics,
        Self::Admins,
    ];
}

/// The sections visible to `role`, in tab order.
#[must_use]
pub const fn sections_for(role: AdminRole) -> &'static [PanelSection] {
    use PanelSection::{Admins, Analytics, Dashboard, Posts, Social};

    match role {
        AdminRole::SuperAdmin => &[Dashboard, Social, Posts, Analytics, Admins],
        AdminRole::ContentAdmin => &[Dashboard, Posts],
        AdminRole::AnalyticsAdmin => &[Dashboard, Analytics],
        AdminRole::SocialAdmin => &[Dashboard, Social, Posts],
    }
}

/// Whether `role` may view `section`.
#[must_use]
pub fn can_access(role: AdminRole, section: PanelSection) -> bool {
    sections_for(role).contains(&section)
}

/// The sections visible to a raw role string.
///
/// Role strings can reach the system from outside the closed enum (config,
/// manual database edits). An unknown role grants no extra permissions:
/// the result is dashboard-only.
#[must_use]
pub fn sections_for_str(role: &str) -> &'static [PanelSection] {
    role.parse::<AdminRole>()
        .map_or(&[PanelSection::Dashboard], sections_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table_is_exact() {
        use PanelSection::{Admins, Analytics, Dashboard, Posts, Social};

        assert_eq!(
            sections_for(AdminRole::SuperAdmin),
            &[Dashboard, Social, Posts, Analytics, Admins]
        );
        assert_eq!(sections_for(AdminRole::ContentAdmin), &[Dashboard, Posts]);
        assert_eq!(
            sections_for(AdminRole::AnalyticsAdmin),
            &[Dashboard, Analytics]
        );
        assert_eq!(
            sections_for(AdminRole::SocialAdmin),
            &[Dashboard, Social, Posts]
        );
    }

    #[test]
    fn test_dashboard_visible_to_all_roles() {
        for role in AdminRole::ALL {
            assert!(can_access(role, PanelSection::Dashboard), "{role}");
        }
    }

    #[test]
    fn test_admins_section_is_super_admin_only() {
        for role in AdminRole::ALL {
            let expected = role == AdminRole::SuperAdmin;
            assert_eq!(can_access(role, PanelSection::Admins), expected, "{role}");
        }
    }

    #[test]
    fn test_social_admin_scenario() {
        // social_admin sees dashboard, social and posts; analytics and
        // admin management are absent.
        let sections = sections_for(AdminRole::SocialAdmin);
        assert!(sections.contains(&PanelSection::Dashboard));
        assert!(sections.contains(&PanelSection::Social));
        assert!(sections.contains(&PanelSection::Posts));
        assert!(!sections.contains(&PanelSection::Analytics));
        assert!(!sections.contains(&PanelSection::Admins));
    }

    #[test]
    fn test_unknown_role_is_dashboard_only() {
        assert_eq!(sections_for_str("editor"), &[PanelSection::Dashboard]);
        assert_eq!(sections_for_str(""), &[PanelSection::Dashboard]);
    }

    #[test]
    fn test_known_role_string_matches_enum() {
        for role in AdminRole::ALL {
            assert_eq!(sections_for_str(&role.to_string()), sections_for(role));
        }
    }
}
