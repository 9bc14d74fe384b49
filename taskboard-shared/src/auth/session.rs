/// Signed session tokens
///
/// A session token ties an authenticated user id to an expiry time and is
/// carried in an HttpOnly cookie. Tokens are self-contained: there is no
/// server-side session table, the signature is the proof.
///
/// # Format
///
/// ```text
/// {user_id}.{expires_unix}.{hex(hmac_sha256(secret, "{user_id}.{expires_unix}"))}
/// ```
///
/// Verification is constant-time via the MAC check; the signature is checked
/// before the expiry so a forged token never learns which part was wrong.
///
/// # Example
///
/// ```
/// use taskboard_shared::auth::session::{issue_token, verify_token};
///
/// let secret = "an-example-secret-of-at-least-32-bytes!";
/// let token = issue_token(42, 3600, secret);
/// assert_eq!(verify_token(&token, secret), Ok(42));
/// ```
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Error type for session token verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Token does not have the expected three-part shape
    #[error("Malformed session token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Session token signature mismatch")]
    BadSignature,

    /// Token was valid but its expiry has passed
    #[error("Session token expired")]
    Expired,
}

/// Issues a session token for a user, valid for `ttl_seconds` from now
pub fn issue_token(user_id: i64, ttl_seconds: i64, secret: &str) -> String {
    issue_token_at(user_id, Utc::now().timestamp() + ttl_seconds, secret)
}

fn issue_token_at(user_id: i64, expires_unix: i64, secret: &str) -> String {
    let payload = format!("{}.{}", user_id, expires_unix);
    format!("{}.{}", payload, sign(&payload, secret))
}

/// Verifies a session token and returns the user id it was issued for
///
/// # Errors
///
/// - `SessionError::Malformed` if the token is not `id.expiry.signature`
///   with numeric id and expiry
/// - `SessionError::BadSignature` if the signature does not match
/// - `SessionError::Expired` if the signature matches but the expiry passed
pub fn verify_token(token: &str, secret: &str) -> Result<i64, SessionError> {
    verify_token_at(token, secret, Utc::now().timestamp())
}

fn verify_token_at(token: &str, secret: &str, now_unix: i64) -> Result<i64, SessionError> {
    let mut parts = token.splitn(3, '.');
    let (id_part, expires_part, signature) = match (parts.next(), parts.next(), parts.next()) {
        (Some(id), Some(exp), Some(sig)) => (id, exp, sig),
        _ => return Err(SessionError::Malformed),
    };

    let user_id: i64 = id_part.parse().map_err(|_| SessionError::Malformed)?;
    let expires_unix: i64 = expires_part.parse().map_err(|_| SessionError::Malformed)?;
    let signature = hex::decode(signature).map_err(|_| SessionError::Malformed)?;

    let payload = format!("{}.{}", id_part, expires_part);
    let mut mac = mac_for(secret);
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| SessionError::BadSignature)?;

    if expires_unix <= now_unix {
        return Err(SessionError::Expired);
    }

    Ok(user_id)
}

fn sign(payload: &str, secret: &str) -> String {
    let mut mac = mac_for(secret);
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn mac_for(secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size")
}

/// Extracts a named cookie value from a raw `Cookie` header
///
/// Cookie headers are `name=value` pairs separated by `;`. Returns the first
/// match; no unquoting is attempted (both cookies this crate issues are
/// header-safe by construction).
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        if k == name {
            Some(v)
        } else {
            None
        }
    })
}
