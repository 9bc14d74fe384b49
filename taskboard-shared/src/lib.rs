//! # Taskboard Shared Library
//!
//! Shared types and business logic used by both Taskboard server variants:
//! the authenticated multi-user app (`taskboard-web`) and the anonymous
//! single-list app (`taskboard-basic`).
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Password hashing and session tokens
//! - `db`: Connection pool and migrations
//! - `validation`: Signup field validation rules

pub mod auth;
pub mod db;
pub mod models;
pub mod validation;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
