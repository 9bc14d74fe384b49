//! # Taskboard Basic Server Library
//!
//! The original, anonymous Taskboard variant: a single shared to-do list
//! with no accounts. Everything it persists is unowned; the multi-user
//! variant lives in `taskboard-web`.
//!
//! ## Modules
//!
//! - `app`: Application state and router
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: Route handlers
//! - `views`: HTML page rendering

pub mod app;
pub mod error;
pub mod routes;
pub mod views;
