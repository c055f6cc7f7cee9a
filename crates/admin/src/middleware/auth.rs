//! Authentication middleware and extractors for the admin panel.
//!
//! The session only proves who the request is from; whether they are
//! still allowed in is decided per request against the `admins` table.
//! Deactivating an admin therefore locks them out immediately, even
//! with a live session cookie.

use askama::Template;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use brightwater_core::AdminRole;

use crate::error::set_sentry_user;
use crate::filters;
use crate::models::{Admin, CurrentAdmin, session_keys};
use crate::state::AppState;

/// Extractor that requires an authenticated, active admin.
///
/// Redirects to the login page when no session identity exists. When an
/// identity exists but no active `admins` row backs it, renders the
/// access denied page instead of the requested content.
pub struct RequireAdmin(pub Admin);

/// Access denied page template.
#[derive(Template)]
#[template(path = "access_denied.html")]
struct AccessDeniedTemplate {
    email: String,
}

/// Error returned when admin authentication fails.
pub enum AdminRejection {
    /// No session identity; redirect to login page.
    RedirectToLogin,
    /// Identity exists but no active admin row backs it.
    Denied { email: String },
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Denied { email } => {
                let body = AccessDeniedTemplate { email }
                    .render()
                    .unwrap_or_else(|_| String::from("Access denied"));
                (StatusCode::FORBIDDEN, Html(body)).into_response()
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminRejection::RedirectToLogin)?;

        // Get the session identity
        let current: CurrentAdmin = session
            .get(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten()
            .ok_or(AdminRejection::RedirectToLogin)?;

        // Directory lookup: the admins table decides, not the cookie
        let repo = crate::db::AdminRepository::new(state.pool());
        let admin = match repo.get_active_by_user_id(current.user_id).await {
            Ok(Some(admin)) => admin,
            Ok(None) => {
                tracing::warn!(
                    email = %current.email,
                    "Session identity has no active admin row, denying"
                );
                return Err(AdminRejection::Denied {
                    email: current.email.to_string(),
                });
            }
            Err(e) => {
                // A lookup failure is indistinguishable from "not an admin"
                // for the client, but logged separately for operators.
                tracing::error!(error = %e, "Admin directory lookup failed");
                return Err(AdminRejection::Denied {
                    email: current.email.to_string(),
                });
            }
        };

        set_sentry_user(&admin.id.to_string(), Some(admin.email.as_str()));

        Ok(Self(admin))
    }
}

/// Extractor that requires an authenticated, active super admin.
pub struct RequireSuperAdmin(pub Admin);

/// Error returned when super admin authentication fails.
pub enum SuperAdminRejection {
    /// Underlying admin authentication failed.
    Admin(AdminRejection),
    /// Admin is active but not a super admin.
    Forbidden,
}

impl IntoResponse for SuperAdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Admin(rejection) => rejection.into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Only super admins can access this resource",
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = SuperAdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAdmin(admin) = RequireAdmin::from_request_parts(parts, state)
            .await
            .map_err(SuperAdminRejection::Admin)?;

        if admin.role != AdminRole::SuperAdmin {
            return Err(SuperAdminRejection::Forbidden);
        }

        Ok(Self(admin))
    }
}

/// Helper to set the current admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
