/// Authentication building blocks
///
/// This module provides the two credential primitives the web variant is
/// built on:
///
/// - `password`: Argon2id hashing and verification for stored credentials
/// - `session`: HMAC-SHA256 signed session tokens carried in a cookie
///
/// Route gating itself lives in the web crate's middleware; these modules
/// are deliberately free of any HTTP types beyond cookie-string parsing.

pub mod password;
pub mod session;
