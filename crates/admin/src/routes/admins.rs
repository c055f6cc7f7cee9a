//! Admin management route handlers (`super_admin` only).
//!
//! New admins enter through invites; there is no direct creation form.
//! A super admin can never change their own role or deactivate
//! themselves, so the panel cannot be locked out by accident.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use brightwater_core::{AdminId, AdminRole, Email};

use crate::{
    db::{AdminInviteRepository, AdminRepository, RepositoryError},
    error::AppError,
    filters,
    middleware::RequireSuperAdmin,
    models::{Admin, AdminInvite},
    state::AppState,
};

use super::{Flash, NavView, encode_query};

/// Invite links are valid for a week.
const INVITE_EXPIRY_DAYS: i32 = 7;

/// Admin list item for templates.
#[derive(Debug, Clone)]
pub struct AdminListItem {
    pub id: String,
    pub email: String,
    pub role: String,
    pub role_label: String,
    pub is_active: bool,
    pub joined_on: String,
    /// The row belonging to the signed-in super admin renders without
    /// role/deactivate controls.
    pub is_self: bool,
}

impl AdminListItem {
    fn new(admin: &Admin, actor: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            email: admin.email.to_string(),
            role: admin.role.to_string(),
            role_label: admin.role.label().to_string(),
            is_active: admin.is_active,
            joined_on: admin.created_at.format("%b %e, %Y").to_string(),
            is_self: admin.id == actor.id,
        }
    }
}

/// Pending invite view for templates.
#[derive(Debug, Clone)]
pub struct InviteListItem {
    pub email: String,
    pub role_label: String,
    pub expires_on: String,
    pub signup_url: String,
}

/// Role option for select inputs.
#[derive(Debug, Clone)]
pub struct RoleOption {
    pub value: String,
    pub label: String,
}

fn role_options() -> Vec<RoleOption> {
    AdminRole::ALL
        .iter()
        .map(|r| RoleOption {
            value: r.to_string(),
            label: r.label().to_string(),
        })
        .collect()
}

/// Admin management page template.
#[derive(Template)]
#[template(path = "admins.html")]
struct AdminsTemplate {
    nav: NavView,
    admins: Vec<AdminListItem>,
    pending_invites: Vec<InviteListItem>,
    roles: Vec<RoleOption>,
    notice: Option<String>,
    error: Option<String>,
}

fn signup_url(base_url: &str, invite: &AdminInvite) -> String {
    format!(
        "{}/signup?token={}",
        base_url.trim_end_matches('/'),
        invite.token
    )
}

/// Admin management page.
///
/// GET /admins
#[instrument(skip(actor, state))]
pub async fn index(
    RequireSuperAdmin(actor): RequireSuperAdmin,
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> Result<impl IntoResponse, AppError> {
    let admin_repo = AdminRepository::new(state.pool());
    let invite_repo = AdminInviteRepository::new(state.pool());

    let admins = admin_repo.list_all().await?;
    let invites = invite_repo.list_all().await?;

    let pending_invites = invites
        .iter()
        .filter(|i| i.is_valid())
        .map(|i| InviteListItem {
            email: i.email.to_string(),
            role_label: i.role.label().to_string(),
            expires_on: i.expires_at.format("%b %e, %Y").to_string(),
            signup_url: signup_url(&state.config().base_url, i),
        })
        .collect();

    let template = AdminsTemplate {
        nav: NavView::new(&actor, "/admins"),
        admins: admins.iter().map(|a| AdminListItem::new(a, &actor)).collect(),
        pending_invites,
        roles: role_options(),
        notice: flash.notice,
        error: flash.error,
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}

#[derive(Debug, Deserialize)]
pub struct InviteForm {
    email: String,
    role: String,
}

/// Issue an invite.
///
/// POST /admins/invites
#[instrument(skip(actor, state, form))]
pub async fn create_invite(
    RequireSuperAdmin(actor): RequireSuperAdmin,
    State(state): State<AppState>,
    axum::Form(form): axum::Form<InviteForm>,
) -> Result<Redirect, AppError> {
    let Ok(email) = Email::parse(form.email.trim()) else {
        return Ok(flash_error("That email address is not valid."));
    };
    let Ok(role) = form.role.parse::<AdminRole>() else {
        return Ok(flash_error("Unknown role."));
    };

    let invite_repo = AdminInviteRepository::new(state.pool());
    let invite = match invite_repo
        .create(&email, role, Some(actor.id), INVITE_EXPIRY_DAYS)
        .await
    {
        Ok(invite) => invite,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create invite");
            return Ok(flash_error(repo_failure_message(&e)));
        }
    };

    let url = signup_url(&state.config().base_url, &invite);

    // Without SMTP the link still shows up on the admins page and in logs
    if let Some(email_service) = state.email() {
        if let Err(e) = email_service
            .send_invite(invite.email.as_str(), invite.role.label(), &url)
            .await
        {
            tracing::error!(error = %e, to = %invite.email, "Failed to send invite email");
            return Ok(flash_error(
                "Invite created, but the email could not be sent. Share the link from the list below.",
            ));
        }
    } else {
        tracing::info!(to = %invite.email, url = %url, "Invite created (no SMTP configured)");
    }

    tracing::info!(to = %invite.email, role = %invite.role, by = %actor.email, "Admin invited");
    Ok(flash_notice(&format!("Invite sent to {}.", invite.email)))
}

#[derive(Debug, Deserialize)]
pub struct RoleForm {
    role: String,
}

/// Change an admin's role.
///
/// POST /admins/{id}/role
#[instrument(skip(actor, state, form))]
pub async fn update_role(
    RequireSuperAdmin(actor): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Form(form): axum::Form<RoleForm>,
) -> Result<Redirect, AppError> {
    let id = AdminId::new(id);
    if id == actor.id {
        return Err(AppError::Forbidden(
            "you cannot change your own role".to_string(),
        ));
    }

    let Ok(role) = form.role.parse::<AdminRole>() else {
        return Ok(flash_error("Unknown role."));
    };

    let repo = AdminRepository::new(state.pool());
    let updated = match repo.update_role(id, role).await {
        Ok(updated) => updated,
        Err(e) => {
            tracing::error!(error = %e, admin_id = %id, "Failed to change admin role");
            return Ok(flash_error(repo_failure_message(&e)));
        }
    };

    tracing::info!(admin = %updated.email, role = %updated.role, by = %actor.email, "Admin role changed");
    Ok(flash_notice(&format!(
        "{} is now {}.",
        updated.email,
        updated.role.label()
    )))
}

/// Activate or deactivate an admin.
///
/// POST /admins/{id}/toggle
#[instrument(skip(actor, state))]
pub async fn toggle_active(
    RequireSuperAdmin(actor): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    let id = AdminId::new(id);
    if id == actor.id {
        return Err(AppError::Forbidden(
            "you cannot deactivate your own account".to_string(),
        ));
    }

    let repo = AdminRepository::new(state.pool());
    let current = match repo.get_by_id(id).await {
        Ok(Some(admin)) => admin,
        Ok(None) => return Ok(flash_error("That admin no longer exists.")),
        Err(e) => {
            tracing::error!(error = %e, admin_id = %id, "Failed to look up admin");
            return Ok(flash_error(repo_failure_message(&e)));
        }
    };
    let updated = match repo.set_active(id, !current.is_active).await {
        Ok(updated) => updated,
        Err(e) => {
            tracing::error!(error = %e, admin_id = %id, "Failed to toggle admin");
            return Ok(flash_error(repo_failure_message(&e)));
        }
    };

    let verb = if updated.is_active {
        "activated"
    } else {
        "deactivated"
    };
    tracing::info!(admin = %updated.email, by = %actor.email, "Admin {verb}");
    Ok(flash_notice(&format!("{} {verb}.", updated.email)))
}

fn flash_notice(message: &str) -> Redirect {
    Redirect::to(&format!("/admins?notice={}", encode_query(message)))
}

fn flash_error(message: &str) -> Redirect {
    Redirect::to(&format!("/admins?error={}", encode_query(message)))
}

/// Notice shown when a repository call fails mid-mutation.
fn repo_failure_message(e: &RepositoryError) -> &'static str {
    match e {
        RepositoryError::Conflict(_) => "An invite for that email already exists.",
        RepositoryError::NotFound => "That admin no longer exists.",
        _ => "Something went wrong. Try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_failures_map_to_notices() {
        assert_eq!(
            repo_failure_message(&RepositoryError::Conflict("duplicate".to_string())),
            "An invite for that email already exists."
        );
        assert_eq!(
            repo_failure_message(&RepositoryError::NotFound),
            "That admin no longer exists."
        );
        assert_eq!(
            repo_failure_message(&RepositoryError::DataCorruption("bad row".to_string())),
            "Something went wrong. Try again."
        );
    }
}
