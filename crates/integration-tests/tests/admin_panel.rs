//! Integration tests for the admin panel.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p brightwater-admin)
//!
//! Run with: cargo test -p brightwater-integration-tests -- --ignored

use reqwest::StatusCode;

use brightwater_integration_tests::{admin_base_url, client, no_redirect_client};

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_anonymous_panel_access_redirects_to_login() {
    let client = no_redirect_client();
    let base_url = admin_base_url();

    for path in ["/", "/social", "/posts", "/analytics", "/admins"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to request panel page");

        assert!(
            resp.status().is_redirection(),
            "{path} should redirect anonymous visitors, got {}",
            resp.status()
        );
        let location = resp
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(location, "/login", "{path} should redirect to /login");
    }
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_login_page_renders() {
    let client = client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/login"))
        .send()
        .await
        .expect("Failed to get login page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Sign in"));
    assert!(body.contains("name=\"password\""));
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_wrong_credentials_rejected() {
    let client = no_redirect_client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[
            ("email", "nobody@example.org"),
            ("password", "definitely-not-the-password"),
        ])
        .send()
        .await
        .expect("Failed to post login");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.starts_with("/login?error="),
        "expected login error redirect, got {location}"
    );
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_signup_requires_valid_token() {
    let client = no_redirect_client();
    let base_url = admin_base_url();

    // No token at all
    let resp = client
        .get(format!("{base_url}/signup"))
        .send()
        .await
        .expect("Failed to get signup page");
    assert!(resp.status().is_redirection());

    // Unknown token
    let resp = client
        .get(format!("{base_url}/signup?token=definitelynotarealtoken"))
        .send()
        .await
        .expect("Failed to get signup page");
    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(location.starts_with("/login?error="));
}
