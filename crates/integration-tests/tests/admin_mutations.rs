//! Integration tests for authenticated admin mutations.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied, reachable
//!   via `ADMIN_DATABASE_URL` (or `DATABASE_URL`)
//! - The admin server running against that same database
//!
//! Each test provisions its own super admin with a unique email and
//! signs in over HTTP, so concurrent runs do not interfere.
//!
//! Run with: cargo test -p brightwater-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use secrecy::SecretString;
use sqlx::PgPool;
use uuid::Uuid;

use brightwater_admin::db::{AdminRepository, SocialAccountRepository, create_pool};
use brightwater_admin::models::SocialAccount;
use brightwater_admin::services::AuthService;
use brightwater_core::{AdminId, AdminRole, SocialAccountId};
use brightwater_integration_tests::{admin_base_url, client};

const TEST_PASSWORD: &str = "integration-test-password";

async fn test_pool() -> PgPool {
    let url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("ADMIN_DATABASE_URL or DATABASE_URL must be set");
    create_pool(&SecretString::from(url))
        .await
        .expect("Failed to connect to database")
}

/// Create an active super admin with a unique email for this test run.
async fn provision_super_admin(pool: &PgPool) -> (AdminId, String) {
    let email = format!("it-{}@example.org", Uuid::new_v4().simple());
    let admin = AuthService::new(pool)
        .create_admin(&email, AdminRole::SuperAdmin, TEST_PASSWORD)
        .await
        .expect("Failed to create test admin");
    (admin.id, email)
}

/// Sign in over HTTP, returning a client holding the session cookie.
async fn sign_in(base_url: &str, email: &str) -> Client {
    let client = client();
    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("email", email), ("password", TEST_PASSWORD)])
        .send()
        .await
        .expect("Failed to post login");
    assert!(resp.status().is_success());
    assert_eq!(
        resp.url().path(),
        "/",
        "login should land on the dashboard, not {}",
        resp.url().path()
    );
    client
}

/// Remove a test admin created by `provision_super_admin`.
async fn remove_test_admin(pool: &PgPool, id: AdminId) {
    sqlx::query("DELETE FROM admins WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to remove test admin");
}

/// Connect a social account over HTTP and return its row.
async fn connect_account(
    client: &Client,
    base_url: &str,
    pool: &PgPool,
    account_id: &str,
) -> SocialAccount {
    let resp = client
        .post(format!("{base_url}/social"))
        .form(&[
            ("platform", "facebook"),
            ("account_name", "Integration test page"),
            ("account_id", account_id),
            ("access_token", "it-access-token"),
        ])
        .send()
        .await
        .expect("Failed to post connect form");
    assert!(resp.status().is_success());

    find_account(pool, account_id)
        .await
        .expect("connected account should exist")
}

async fn find_account(pool: &PgPool, account_id: &str) -> Option<SocialAccount> {
    SocialAccountRepository::new(pool)
        .list_all()
        .await
        .expect("Failed to list social accounts")
        .into_iter()
        .find(|a| a.account_id == account_id)
}

async fn remove_account(pool: &PgPool, id: SocialAccountId) {
    SocialAccountRepository::new(pool)
        .delete(id)
        .await
        .expect("Failed to remove test account");
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_self_role_change_rejected() {
    let pool = test_pool().await;
    let (admin_id, email) = provision_super_admin(&pool).await;
    let base_url = admin_base_url();
    let client = sign_in(&base_url, &email).await;

    let resp = client
        .post(format!("{base_url}/admins/{admin_id}/role"))
        .form(&[("role", "content_admin")])
        .send()
        .await
        .expect("Failed to post role change");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let admin = AdminRepository::new(&pool)
        .get_by_id(admin_id)
        .await
        .expect("Failed to look up admin")
        .expect("admin should still exist");
    assert_eq!(admin.role, AdminRole::SuperAdmin, "role must be unchanged");

    remove_test_admin(&pool, admin_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_self_deactivation_rejected() {
    let pool = test_pool().await;
    let (admin_id, email) = provision_super_admin(&pool).await;
    let base_url = admin_base_url();
    let client = sign_in(&base_url, &email).await;

    let resp = client
        .post(format!("{base_url}/admins/{admin_id}/toggle"))
        .send()
        .await
        .expect("Failed to post toggle");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let admin = AdminRepository::new(&pool)
        .get_by_id(admin_id)
        .await
        .expect("Failed to look up admin")
        .expect("admin should still exist");
    assert!(admin.is_active, "account must remain active");

    remove_test_admin(&pool, admin_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_connect_records_the_connecting_admin() {
    let pool = test_pool().await;
    let (admin_id, email) = provision_super_admin(&pool).await;
    let base_url = admin_base_url();
    let client = sign_in(&base_url, &email).await;

    let external_id = format!("it-{}", Uuid::new_v4().simple());
    let account = connect_account(&client, &base_url, &pool, &external_id).await;

    assert_eq!(account.added_by, Some(admin_id));
    assert!(account.is_active, "new accounts start active");

    remove_account(&pool, account.id).await;
    remove_test_admin(&pool, admin_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_toggle_twice_restores_active_flag() {
    let pool = test_pool().await;
    let (admin_id, email) = provision_super_admin(&pool).await;
    let base_url = admin_base_url();
    let client = sign_in(&base_url, &email).await;

    let external_id = format!("it-{}", Uuid::new_v4().simple());
    let account = connect_account(&client, &base_url, &pool, &external_id).await;

    for _ in 0..2 {
        let resp = client
            .post(format!("{base_url}/social/{}/toggle", account.id))
            .send()
            .await
            .expect("Failed to post toggle");
        assert!(resp.status().is_success());
    }

    let after = find_account(&pool, &external_id)
        .await
        .expect("account should still exist");
    assert!(after.is_active, "two toggles must restore the active flag");

    remove_account(&pool, account.id).await;
    remove_test_admin(&pool, admin_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_delete_without_confirmation_keeps_account() {
    let pool = test_pool().await;
    let (admin_id, email) = provision_super_admin(&pool).await;
    let base_url = admin_base_url();
    let client = sign_in(&base_url, &email).await;

    let external_id = format!("it-{}", Uuid::new_v4().simple());
    let account = connect_account(&client, &base_url, &pool, &external_id).await;

    // Unchecked confirmation checkbox: the field is absent from the form
    let resp = client
        .post(format!("{base_url}/social/{}/delete", account.id))
        .form::<[(&str, &str); 0]>(&[])
        .send()
        .await
        .expect("Failed to post delete");
    assert!(resp.status().is_success());
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Deletion requires confirmation."));

    assert!(
        find_account(&pool, &external_id).await.is_some(),
        "account must survive an unconfirmed delete"
    );

    remove_account(&pool, account.id).await;
    remove_test_admin(&pool, admin_id).await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_connect_without_token_rejected() {
    let pool = test_pool().await;
    let (admin_id, email) = provision_super_admin(&pool).await;
    let base_url = admin_base_url();
    let client = sign_in(&base_url, &email).await;

    let external_id = format!("it-{}", Uuid::new_v4().simple());
    let resp = client
        .post(format!("{base_url}/social"))
        .form(&[
            ("platform", "facebook"),
            ("account_name", "Integration test page"),
            ("account_id", external_id.as_str()),
            ("access_token", ""),
        ])
        .send()
        .await
        .expect("Failed to post connect form");
    assert!(resp.status().is_success());
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("An access token is required"));

    assert!(
        find_account(&pool, &external_id).await.is_none(),
        "no account may be stored without a credential"
    );

    remove_test_admin(&pool, admin_id).await;
}
