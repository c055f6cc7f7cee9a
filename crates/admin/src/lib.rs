//! Brightwater Collective admin panel library.
//!
//! This crate provides the back-office functionality as a library,
//! allowing it to be tested and reused (the CLI shares its repositories
//! and auth service).
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-rendered templates
//! - `PostgreSQL` via sqlx: admin directory, invites, social accounts,
//!   posts, engagement snapshots, contact messages
//! - tower-sessions for cookie sessions; every request re-checks the
//!   `admins` table, so the session is identity only, never authority

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
