//! Domain models for the admin panel.

pub mod admin;
pub mod post;
pub mod session;
pub mod social_account;

pub use admin::{Admin, AdminInvite};
pub use post::{NewPost, Post, PostEngagement};
pub use session::{CurrentAdmin, keys as session_keys};
pub use social_account::{NewSocialAccount, SocialAccount};
