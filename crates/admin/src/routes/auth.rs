//! Authentication route handlers.
//!
//! Email/password login, logout, and invite-token signup. There is no
//! open registration: the signup page only works with a valid invite.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::clear_sentry_user;
use crate::filters;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

use super::encode_query;

/// Login page template.
#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
    notice: Option<String>,
}

/// Signup page template.
#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate {
    token: String,
    email: String,
    role_label: String,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    error: Option<String>,
    notice: Option<String>,
}

/// Render the login page.
///
/// GET /login
pub async fn login_page(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    render(LoginTemplate {
        error: query.error,
        notice: query.notice,
    })
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

/// Email/password login.
///
/// POST /login
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    axum::Form(form): axum::Form<LoginForm>,
) -> Redirect {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.email, &form.password).await {
        Ok(admin) => {
            let current = CurrentAdmin::from(&admin);
            if let Err(e) = set_current_admin(&session, &current).await {
                tracing::error!(error = %e, "Failed to store session identity");
                return Redirect::to("/login?error=Something+went+wrong.+Try+again.");
            }
            tracing::info!(email = %admin.email, role = %admin.role, "Admin logged in");
            Redirect::to("/")
        }
        Err(AuthError::AccountDisabled) => {
            tracing::warn!(email = %form.email, "Login attempt on deactivated account");
            Redirect::to("/login?error=This+account+has+been+deactivated.")
        }
        Err(AuthError::Repository(e)) => {
            tracing::error!(error = %e, "Login lookup failed");
            Redirect::to("/login?error=Something+went+wrong.+Try+again.")
        }
        Err(_) => {
            // Same message for unknown email and wrong password
            Redirect::to("/login?error=Invalid+email+or+password.")
        }
    }
}

/// Logout and clear session.
///
/// POST /logout
pub async fn logout(session: Session) -> Redirect {
    let _ = clear_current_admin(&session).await;
    clear_sentry_user();
    Redirect::to("/login")
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    token: Option<String>,
    error: Option<String>,
}

/// Render the invite signup page.
///
/// GET /signup?token=...
#[instrument(skip(state, query))]
pub async fn signup_page(
    State(state): State<AppState>,
    Query(query): Query<SignupQuery>,
) -> impl IntoResponse {
    let Some(token) = query.token else {
        return Redirect::to("/login?error=That+invite+link+is+missing+its+token.")
            .into_response();
    };

    let invites = crate::db::AdminInviteRepository::new(state.pool());
    match invites.get_valid_by_token(&token).await {
        Ok(Some(invite)) => render(SignupTemplate {
            token,
            email: invite.email.to_string(),
            role_label: invite.role.label().to_string(),
            error: query.error,
        })
        .into_response(),
        Ok(None) => {
            Redirect::to("/login?error=That+invite+link+is+invalid+or+has+expired.")
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Invite lookup failed");
            Redirect::to("/login?error=Something+went+wrong.+Try+again.").into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    token: String,
    password: String,
    password_confirm: String,
}

/// Complete invite signup.
///
/// POST /signup
#[instrument(skip(state, form))]
pub async fn signup(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<SignupForm>,
) -> Redirect {
    if form.password != form.password_confirm {
        return signup_error(&form.token, "Passwords do not match.");
    }

    let auth = AuthService::new(state.pool());
    match auth.register_from_invite(&form.token, &form.password).await {
        Ok(admin) => {
            tracing::info!(email = %admin.email, role = %admin.role, "Admin registered from invite");
            Redirect::to("/login?notice=Account+created.+You+can+sign+in+now.")
        }
        Err(AuthError::InviteInvalid) => {
            Redirect::to("/login?error=That+invite+link+is+invalid+or+has+expired.")
        }
        Err(AuthError::WeakPassword(reason)) => signup_error(&form.token, &reason),
        Err(AuthError::AdminAlreadyExists) => {
            Redirect::to("/login?error=An+account+already+exists+for+that+email.")
        }
        Err(e) => {
            tracing::error!(error = %e, "Invite signup failed");
            Redirect::to("/login?error=Something+went+wrong.+Try+again.")
        }
    }
}

fn signup_error(token: &str, message: &str) -> Redirect {
    Redirect::to(&format!(
        "/signup?token={}&error={}",
        encode_query(token),
        encode_query(message)
    ))
}

fn render<T: Template>(template: T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
