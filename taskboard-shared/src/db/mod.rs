/// Database utilities
///
/// This module provides connection pool management and migration running
/// for the embedded SQLite store both server variants persist into.
///
/// # Modules
///
/// - `pool`: Connection pool creation and health checks
/// - `migrations`: Schema migration runner

pub mod migrations;
pub mod pool;
