//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Email/password login
//! POST /logout                 - Logout
//! GET  /signup                 - Invite signup page (?token=...)
//! POST /signup                 - Complete invite signup
//!
//! # Panel (session + active admins row required)
//! GET  /                       - Dashboard overview
//! GET  /social                 - Social accounts (super_admin, social_admin)
//! POST /social                 - Connect account
//! POST /social/{id}/toggle     - Toggle account active flag
//! POST /social/{id}/delete     - Delete account (requires confirm field)
//! GET  /posts                  - Posts placeholder (super, content, social)
//! GET  /analytics              - Analytics placeholder (super, analytics)
//!
//! # Admin management (super_admin only)
//! GET  /admins                 - List admins and pending invites
//! POST /admins/invites         - Issue an invite
//! POST /admins/{id}/role       - Change an admin's role
//! POST /admins/{id}/toggle     - Activate/deactivate an admin
//! ```

pub mod admins;
pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod posts;
pub mod social_accounts;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use brightwater_core::policy::{self, PanelSection};

use crate::models::Admin;
use crate::state::AppState;

/// Build the panel router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Auth
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        // Social accounts
        .route(
            "/social",
            get(social_accounts::index).post(social_accounts::create),
        )
        .route("/social/{id}/toggle", post(social_accounts::toggle))
        .route("/social/{id}/delete", post(social_accounts::delete))
        // Placeholders
        .route("/posts", get(posts::index))
        .route("/analytics", get(analytics::index))
        // Admin management
        .route("/admins", get(admins::index))
        .route("/admins/invites", post(admins::create_invite))
        .route("/admins/{id}/role", post(admins::update_role))
        .route("/admins/{id}/toggle", post(admins::toggle_active))
}

/// Navigation state for templates.
///
/// Tabs render from the role policy, so a content admin never sees the
/// social or admins tabs at all.
#[derive(Debug, Clone)]
pub struct NavView {
    pub email: String,
    pub role_label: String,
    pub can_social: bool,
    pub can_posts: bool,
    pub can_analytics: bool,
    pub can_admins: bool,
    pub current_path: String,
}

impl NavView {
    pub(crate) fn new(admin: &Admin, current_path: &str) -> Self {
        Self {
            email: admin.email.to_string(),
            role_label: admin.role.label().to_string(),
            can_social: policy::can_access(admin.role, PanelSection::Social),
            can_posts: policy::can_access(admin.role, PanelSection::Posts),
            can_analytics: policy::can_access(admin.role, PanelSection::Analytics),
            can_admins: policy::can_access(admin.role, PanelSection::Admins),
            current_path: current_path.to_string(),
        }
    }
}

/// One-shot notice/error carried through redirects as query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct Flash {
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Percent-encode a string for use in a redirect query parameter.
pub(crate) fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brightwater_core::{AdminId, AdminRole, Email, UserId};
    use chrono::Utc;

    fn admin_with_role(role: AdminRole) -> Admin {
        Admin {
            id: AdminId::generate(),
            user_id: UserId::generate(),
            email: Email::parse("staff@example.org").expect("valid email"),
            role,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_nav_hides_tabs_by_role() {
        let nav = NavView::new(&admin_with_role(AdminRole::ContentAdmin), "/posts");
        assert!(nav.can_posts);
        assert!(!nav.can_social);
        assert!(!nav.can_analytics);
        assert!(!nav.can_admins);
    }

    #[test]
    fn test_nav_shows_everything_for_super_admin() {
        let nav = NavView::new(&admin_with_role(AdminRole::SuperAdmin), "/");
        assert!(nav.can_social && nav.can_posts && nav.can_analytics && nav.can_admins);
    }

    #[test]
    fn test_encode_query_escapes_reserved_characters() {
        assert_eq!(encode_query("a&b=c d"), "a%26b%3Dc+d");
    }
}
