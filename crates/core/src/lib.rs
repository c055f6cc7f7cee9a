//! Brightwater Core - Shared types library.
//!
//! This crate provides common types used across all Brightwater components:
//! - `site` - Public marketing website
//! - `admin` - Internal administration panel
//! - `cli` - Command-line tools for migrations and provisioning
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and the
//!   role/platform/status enums
//! - [`policy`] - The role-to-panel-section access policy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod policy;
pub mod types;

pub use types::*;
