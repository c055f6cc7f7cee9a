//! HTTP route handlers for the public site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - Home page
//! GET  /about       - About the collective
//! GET  /causes      - Causes and programs
//! GET  /contact     - Contact page with message widget
//! POST /contact     - Store a visitor message
//! GET  /health      - Liveness check (in main)
//! GET  /health/ready - Readiness check (in main)
//! ```

pub mod contact;
pub mod home;
pub mod pages;

use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/causes", get(pages::causes))
        .route("/contact", get(contact::page).post(contact::submit))
}
