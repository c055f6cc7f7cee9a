//! Integration tests for the public site.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The site server running (cargo run -p brightwater-site)
//!
//! Run with: cargo test -p brightwater-integration-tests -- --ignored

use reqwest::StatusCode;

use brightwater_integration_tests::{client, site_base_url};

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = site_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_public_pages_render() {
    let client = client();
    let base_url = site_base_url();

    for (path, marker) in [
        ("/", "Brightwater Collective"),
        ("/about", "About the collective"),
        ("/causes", "Causes"),
        ("/contact", "Contact us"),
    ] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to get page");

        assert_eq!(resp.status(), StatusCode::OK, "{path} should render");
        let body = resp.text().await.expect("Failed to read body");
        assert!(body.contains(marker), "{path} should contain {marker:?}");
    }
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_contact_form_requires_message() {
    let client = client();
    let base_url = site_base_url();

    let resp = client
        .post(format!("{base_url}/contact"))
        .form(&[("email", "visitor@example.org"), ("message", "  ")])
        .send()
        .await
        .expect("Failed to post contact form");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Please write a message first."));
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_contact_form_stores_message() {
    let client = client();
    let base_url = site_base_url();

    let resp = client
        .post(format!("{base_url}/contact"))
        .form(&[
            ("email", "visitor@example.org"),
            ("message", "How can our school partner with you?"),
        ])
        .send()
        .await
        .expect("Failed to post contact form");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Thanks for reaching out"));
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_contact_form_rejects_bad_email() {
    let client = client();
    let base_url = site_base_url();

    let resp = client
        .post(format!("{base_url}/contact"))
        .form(&[("email", "not-an-email"), ("message", "hello")])
        .send()
        .await
        .expect("Failed to post contact form");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("doesn't look right"));
    // Visitor input is retained in the form
    assert!(body.contains("not-an-email"));
}
