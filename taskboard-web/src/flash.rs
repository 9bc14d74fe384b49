/// One-shot flash messages
///
/// Recoverable failures (signup rule violations, wrong password, missing
/// task ids) are reported as a short message on the next page. The message
/// rides in a `flash` cookie set alongside the redirect, is read when the
/// next page renders, and is cleared in that same response.
///
/// The cookie value is the hex encoding of the UTF-8 message, which keeps
/// arbitrary text header-safe without pulling in a percent-encoding crate.
///
/// # Example
///
/// ```
/// use taskboard_web::flash;
///
/// let response = flash::redirect_with_flash("/login", "Invalid email or password");
/// // The Set-Cookie header now carries the hex-encoded message.
/// ```
use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};

use taskboard_shared::auth::session::cookie_value;

/// Name of the flash cookie
pub const FLASH_COOKIE: &str = "flash";

/// Builds a redirect response carrying a flash message
pub fn redirect_with_flash(to: &str, message: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; Max-Age=60",
        FLASH_COOKIE,
        hex::encode(message.as_bytes())
    );
    response.headers_mut().append(
        header::SET_COOKIE,
        // Hex output is always a valid header value
        HeaderValue::from_str(&cookie).unwrap(),
    );
    response
}

/// Reads the flash message from a request's Cookie header, if any
///
/// An undecodable cookie (not hex, not UTF-8) is treated as absent rather
/// than surfaced as an error; flash messages are cosmetic.
pub fn take(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    let value = cookie_value(raw, FLASH_COOKIE)?;
    let bytes = hex::decode(value).ok()?;
    String::from_utf8(bytes).ok()
}

/// Renders a page, consuming any pending flash message
///
/// The render closure receives the message (if one was flashed on the
/// previous redirect) and the response clears the cookie so the message
/// shows exactly once.
pub fn render_page(
    headers: &HeaderMap,
    render: impl FnOnce(Option<&str>) -> String,
) -> Response {
    let message = take(headers);
    let mut response = axum::response::Html(render(message.as_deref())).into_response();
    if message.is_some() {
        clear(&mut response);
    }
    response
}

/// Appends a Set-Cookie header that expires the flash cookie
///
/// Called by page renders after the message has been displayed once.
pub fn clear(response: &mut Response) {
    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", FLASH_COOKIE);
    response
        .headers_mut()
        .append(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
}
