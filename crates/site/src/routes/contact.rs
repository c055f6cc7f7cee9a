//! Contact page route handlers.
//!
//! Visitor messages are stored in `chat_history` together with a canned
//! acknowledgement row, so staff reading the table later see the
//! exchange in order. A failed write degrades to an error notice; the
//! visitor's input is kept in the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::instrument;

use brightwater_core::Email;

use crate::db::ChatRepository;
use crate::filters;
use crate::state::AppState;

/// The acknowledgement stored alongside every visitor message.
const ACK_MESSAGE: &str =
    "Thanks for reaching out! Someone from the collective will get back to you soon.";

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    /// Set after a successful submission; renders the confirmation.
    pub sent: bool,
    pub error: Option<String>,
    /// Retained form values on validation or backend failure.
    pub email: String,
    pub message: String,
}

impl ContactTemplate {
    fn blank() -> Self {
        Self {
            sent: false,
            error: None,
            email: String::new(),
            message: String::new(),
        }
    }
}

/// Display the contact page.
///
/// GET /contact
#[instrument]
pub async fn page() -> impl IntoResponse {
    ContactTemplate::blank()
}

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub email: String,
    pub message: String,
}

/// Store a visitor message.
///
/// POST /contact
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ContactForm>,
) -> impl IntoResponse {
    let message = form.message.trim();
    let email = form.email.trim();

    if message.is_empty() {
        return ContactTemplate {
            sent: false,
            error: Some("Please write a message first.".to_string()),
            email: email.to_string(),
            message: String::new(),
        };
    }

    let user_email = if email.is_empty() {
        None
    } else {
        match Email::parse(email) {
            Ok(parsed) => Some(parsed.to_string()),
            Err(_) => {
                return ContactTemplate {
                    sent: false,
                    error: Some("That email address doesn't look right.".to_string()),
                    email: email.to_string(),
                    message: message.to_string(),
                };
            }
        }
    };

    let repo = ChatRepository::new(state.pool());
    let stored = repo
        .record_visitor_message(message, user_email.as_deref())
        .await;

    if let Err(e) = stored {
        tracing::error!(error = %e, "Failed to store visitor message");
        return ContactTemplate {
            sent: false,
            error: Some("Something went wrong saving your message. Please try again.".to_string()),
            email: email.to_string(),
            message: message.to_string(),
        };
    }

    // The acknowledgement is best-effort; the visitor message is already in
    if let Err(e) = repo.record_bot_reply(ACK_MESSAGE).await {
        tracing::warn!(error = %e, "Failed to store acknowledgement reply");
    }

    tracing::info!(has_email = user_email.is_some(), "Visitor message stored");
    ContactTemplate {
        sent: true,
        error: None,
        email: String::new(),
        message: String::new(),
    }
}
