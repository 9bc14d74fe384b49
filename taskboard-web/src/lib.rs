//! # Taskboard Web Server Library
//!
//! The authenticated, multi-user Taskboard variant: account signup and login,
//! cookie sessions, and per-user task lists rendered as server-side HTML.
//!
//! ## Modules
//!
//! - `app`: Application state, router, and session middleware
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `flash`: One-shot flash message cookies
//! - `routes`: Route handlers
//! - `views`: HTML page rendering

pub mod app;
pub mod config;
pub mod error;
pub mod flash;
pub mod routes;
pub mod views;
