//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap the first super admin (prints a generated password)
//! bw-cli admin grant -e admin@example.org -r super_admin
//!
//! # Create an invite and print the signup link
//! bw-cli admin invite -e staff@example.org -r content_admin
//!
//! # List admins
//! bw-cli admin list
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `ADMIN_BASE_URL` - Base URL for generating signup links

use rand::Rng;
use rand::distr::Alphanumeric;

use brightwater_admin::db::{AdminInviteRepository, AdminRepository};
use brightwater_admin::services::AuthService;
use brightwater_core::{AdminRole, Email};

use super::{CliError, connect};

/// Length of generated bootstrap passwords.
const GENERATED_PASSWORD_LENGTH: usize = 20;

/// Create an active admin directly, bypassing the invite flow.
///
/// This is the bootstrap path: the panel's only other registration route
/// requires an invite issued by an existing super admin.
pub async fn grant(email: &str, role: &str, password: Option<&str>) -> Result<(), CliError> {
    let role: AdminRole = role
        .parse()
        .map_err(|_| CliError::InvalidRole(role.to_owned()))?;

    let (password, generated) = match password {
        Some(p) => (p.to_owned(), false),
        None => (generate_password(), true),
    };

    let pool = connect().await?;
    let auth = AuthService::new(&pool);
    let admin = auth.create_admin(email, role, &password).await?;

    tracing::info!("Admin created!");
    tracing::info!("  Email: {}", admin.email);
    tracing::info!("  Role: {}", admin.role);
    if generated {
        tracing::info!("  Password: {}", password);
        tracing::warn!("Store this password now; it is not shown again.");
    }

    Ok(())
}

/// Create an invite and print the tokenized signup link.
pub async fn invite(email: &str, role: &str, expires_in_days: i32) -> Result<(), CliError> {
    let role: AdminRole = role
        .parse()
        .map_err(|_| CliError::InvalidRole(role.to_owned()))?;
    let email = Email::parse(email)?;

    let pool = connect().await?;
    let invites = AdminInviteRepository::new(&pool);

    // Clear out stale invites so a resend isn't blocked by an expired one
    let removed = invites.delete_expired().await?;
    if removed > 0 {
        tracing::info!("Removed {} expired invite(s)", removed);
    }

    let invite = invites.create(&email, role, None, expires_in_days).await?;

    let base_url = std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| {
        tracing::warn!("ADMIN_BASE_URL not set, using default");
        "http://localhost:3001".to_owned()
    });
    let signup_url = format!(
        "{}/signup?token={}",
        base_url.trim_end_matches('/'),
        invite.token
    );

    tracing::info!("Invite created!");
    tracing::info!("  Email: {}", invite.email);
    tracing::info!("  Role: {}", invite.role);
    tracing::info!("  Expires: {}", invite.expires_at.format("%Y-%m-%d %H:%M"));
    tracing::info!("");
    tracing::info!("Share this signup link with the invitee:");
    tracing::info!("  {}", signup_url);

    Ok(())
}

/// List admins with their role and active flag.
pub async fn list() -> Result<(), CliError> {
    let pool = connect().await?;
    let admins = AdminRepository::new(&pool).list_all().await?;

    if admins.is_empty() {
        tracing::info!("No admins yet. Create one with: bw-cli admin grant -e you@example.org");
        return Ok(());
    }

    tracing::info!("{} admin(s):", admins.len());
    for admin in admins {
        let status = if admin.is_active { "active" } else { "deactivated" };
        tracing::info!("  {} - {} ({})", admin.email, admin.role, status);
    }

    Ok(())
}

/// Generate a random alphanumeric password for bootstrap accounts.
fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_length() {
        let password = generate_password();
        assert_eq!(password.len(), GENERATED_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_passwords_differ() {
        assert_ne!(generate_password(), generate_password());
    }
}
