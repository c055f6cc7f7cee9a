//! Core types for Brightwater.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod platform;
pub mod role;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use platform::SocialPlatform;
pub use role::AdminRole;
pub use status::PostStatus;
