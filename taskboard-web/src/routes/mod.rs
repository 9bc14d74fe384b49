/// Route handlers
///
/// - `health`: Liveness check
/// - `auth`: Signup, login, logout
/// - `tasks`: Task list and mutations

pub mod auth;
pub mod health;
pub mod tasks;
