//! Integration tests for Brightwater.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and both binaries
//! cargo run -p brightwater-cli -- migrate
//! cargo run -p brightwater-admin &
//! cargo run -p brightwater-site &
//!
//! # Run integration tests (live-stack tests are #[ignore]d by default)
//! cargo test -p brightwater-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_BASE_URL` - Admin panel URL (default: http://localhost:3001)
//! - `SITE_BASE_URL` - Public site URL (default: http://localhost:3000)

use reqwest::Client;

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Base URL for the public site (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client with a cookie store, following redirects.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// HTTP client that does not follow redirects, for asserting on
/// `Location` headers.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn no_redirect_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
