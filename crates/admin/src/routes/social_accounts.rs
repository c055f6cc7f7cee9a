//! Social account management route handlers.
//!
//! Visible to super admins and social admins. Mutations redirect back
//! to the list so the page always shows the database's view, and
//! deletion only happens when the form carries an explicit
//! confirmation field.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use brightwater_core::policy::PanelSection;
use brightwater_core::{SocialAccountId, SocialPlatform};

use crate::{
    db::{RepositoryError, SocialAccountRepository},
    error::AppError,
    filters,
    middleware::RequireAdmin,
    models::{NewSocialAccount, SocialAccount},
    state::AppState,
};

use super::{Flash, NavView, encode_query};

/// Social account view for templates.
#[derive(Debug, Clone)]
pub struct SocialAccountView {
    pub id: String,
    pub platform_label: String,
    pub account_name: String,
    pub account_id: String,
    pub is_active: bool,
    pub connected_on: String,
}

impl From<&SocialAccount> for SocialAccountView {
    fn from(account: &SocialAccount) -> Self {
        Self {
            id: account.id.to_string(),
            platform_label: account.platform.label().to_string(),
            account_name: account.account_name.clone(),
            account_id: account.account_id.clone(),
            is_active: account.is_active,
            connected_on: account.created_at.format("%b %e, %Y").to_string(),
        }
    }
}

/// Platform option for the connect form.
#[derive(Debug, Clone)]
pub struct PlatformOption {
    pub value: String,
    pub label: String,
}

/// Social accounts page template.
#[derive(Template)]
#[template(path = "social_accounts.html")]
struct SocialAccountsTemplate {
    nav: NavView,
    accounts: Vec<SocialAccountView>,
    platforms: Vec<PlatformOption>,
    notice: Option<String>,
    error: Option<String>,
}

fn require_social_access(admin: &crate::models::Admin) -> Result<(), AppError> {
    if admin.can_access(PanelSection::Social) {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "your role cannot manage social accounts".to_string(),
    ))
}

/// Social accounts list page.
///
/// GET /social
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> Result<impl IntoResponse, AppError> {
    require_social_access(&admin)?;

    let repo = SocialAccountRepository::new(state.pool());
    let accounts = repo.list_all().await?;

    let template = SocialAccountsTemplate {
        nav: NavView::new(&admin, "/social"),
        accounts: accounts.iter().map(SocialAccountView::from).collect(),
        platforms: SocialPlatform::ALL
            .iter()
            .map(|p| PlatformOption {
                value: p.to_string(),
                label: p.label().to_string(),
            })
            .collect(),
        notice: flash.notice,
        error: flash.error,
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}

#[derive(Debug, Deserialize)]
pub struct ConnectForm {
    platform: String,
    account_name: String,
    account_id: String,
    access_token: String,
}

/// Validate the connect form, returning the notice to show on failure.
///
/// The access token is mandatory: an account without a credential cannot
/// publish, so it must not be connectable in the first place.
fn connect_form_error(form: &ConnectForm) -> Option<&'static str> {
    if form.account_name.trim().is_empty() || form.account_id.trim().is_empty() {
        return Some("Account name and account ID are required.");
    }
    if form.access_token.trim().is_empty() {
        return Some("An access token is required to connect an account.");
    }
    None
}

/// Notice shown when a repository call fails mid-mutation.
fn repo_failure_message(e: &RepositoryError) -> &'static str {
    match e {
        RepositoryError::Conflict(_) => "That account is already connected.",
        RepositoryError::NotFound => "That account no longer exists.",
        _ => "Something went wrong. Try again.",
    }
}

/// Connect a new social account.
///
/// POST /social
#[instrument(skip(admin, state, form))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ConnectForm>,
) -> Result<Redirect, AppError> {
    require_social_access(&admin)?;

    if let Some(message) = connect_form_error(&form) {
        return Ok(flash_error(message));
    }

    let Ok(platform) = form.platform.parse::<SocialPlatform>() else {
        return Ok(flash_error("Unknown platform."));
    };

    // The token is sealed before it ever reaches the database
    let access_token_encrypted = match state.credential_cipher().encrypt(form.access_token.trim()) {
        Ok(sealed) => Some(sealed),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encrypt access token");
            return Ok(flash_error("Something went wrong. Try again."));
        }
    };

    let repo = SocialAccountRepository::new(state.pool());
    let account = match repo
        .create(&NewSocialAccount {
            platform,
            account_name: form.account_name.trim().to_string(),
            account_id: form.account_id.trim().to_string(),
            access_token_encrypted,
            added_by: Some(admin.id),
        })
        .await
    {
        Ok(account) => account,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect social account");
            return Ok(flash_error(repo_failure_message(&e)));
        }
    };

    tracing::info!(
        account = %account.account_name,
        platform = %account.platform,
        by = %admin.email,
        "Social account connected"
    );

    Ok(flash_notice(&format!(
        "{} account \"{}\" connected.",
        account.platform.label(),
        account.account_name
    )))
}

/// Toggle an account's active flag.
///
/// POST /social/{id}/toggle
#[instrument(skip(admin, state))]
pub async fn toggle(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    require_social_access(&admin)?;

    let repo = SocialAccountRepository::new(state.pool());
    let account = match repo.toggle_active(SocialAccountId::new(id)).await {
        Ok(account) => account,
        Err(e) => {
            tracing::error!(error = %e, account_id = %id, "Failed to toggle social account");
            return Ok(flash_error(repo_failure_message(&e)));
        }
    };

    let verb = if account.is_active {
        "activated"
    } else {
        "deactivated"
    };
    Ok(flash_notice(&format!(
        "Account \"{}\" {verb}.",
        account.account_name
    )))
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    confirm: Option<String>,
}

/// Delete an account, permanently.
///
/// POST /social/{id}/delete
///
/// The form must carry `confirm=delete`; without it no database call is
/// made at all.
#[instrument(skip(admin, state, form))]
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Form(form): axum::Form<DeleteForm>,
) -> Result<Redirect, AppError> {
    require_social_access(&admin)?;

    if form.confirm.as_deref() != Some("delete") {
        return Ok(flash_error("Deletion requires confirmation."));
    }

    let repo = SocialAccountRepository::new(state.pool());
    if let Err(e) = repo.delete(SocialAccountId::new(id)).await {
        tracing::error!(error = %e, account_id = %id, "Failed to delete social account");
        return Ok(flash_error(repo_failure_message(&e)));
    }

    tracing::info!(account_id = %id, by = %admin.email, "Social account deleted");
    Ok(flash_notice("Account deleted."))
}

fn flash_notice(message: &str) -> Redirect {
    Redirect::to(&format!("/social?notice={}", encode_query(message)))
}

fn flash_error(message: &str) -> Redirect {
    Redirect::to(&format!("/social?error={}", encode_query(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, id: &str, token: &str) -> ConnectForm {
        ConnectForm {
            platform: "facebook".to_string(),
            account_name: name.to_string(),
            account_id: id.to_string(),
            access_token: token.to_string(),
        }
    }

    #[test]
    fn test_connect_form_requires_name_and_id() {
        assert!(connect_form_error(&form("", "123", "tok-1")).is_some());
        assert!(connect_form_error(&form("Main page", "  ", "tok-1")).is_some());
    }

    #[test]
    fn test_connect_form_requires_access_token() {
        assert!(connect_form_error(&form("Main page", "123", "")).is_some());
        assert!(connect_form_error(&form("Main page", "123", "   ")).is_some());
    }

    #[test]
    fn test_connect_form_complete_is_valid() {
        assert!(connect_form_error(&form("Main page", "123", "tok-1")).is_none());
    }

    #[test]
    fn test_repo_failures_map_to_notices() {
        assert_eq!(
            repo_failure_message(&RepositoryError::Conflict("duplicate".to_string())),
            "That account is already connected."
        );
        assert_eq!(
            repo_failure_message(&RepositoryError::NotFound),
            "That account no longer exists."
        );
        assert_eq!(
            repo_failure_message(&RepositoryError::DataCorruption("bad row".to_string())),
            "Something went wrong. Try again."
        );
    }
}
