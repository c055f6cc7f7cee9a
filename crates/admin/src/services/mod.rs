//! Business logic services for the admin panel.

pub mod auth;
pub mod credentials;
pub mod email;

pub use auth::{AuthError, AuthService};
pub use credentials::{CredentialCipher, CredentialCipherError};
pub use email::EmailService;
