/// Authentication endpoints
///
/// # Endpoints
///
/// - `GET  /signup` - Signup form
/// - `POST /signup` - Register a new account
/// - `GET  /login`  - Login form
/// - `POST /login`  - Authenticate
/// - `GET  /logout` - End the session
///
/// Rejections (failed validation rule, duplicate email, wrong credentials)
/// are flashed and the relevant form is shown again; only infrastructure
/// failures surface as error pages.
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use taskboard_shared::{
    auth::{password, session},
    models::user::{CreateUser, User},
    validation::{validate_signup, SignupInput},
};

use crate::{
    app::AppState,
    error::WebResult,
    flash::{redirect_with_flash, render_page},
    views,
};

/// Signup form fields
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub user_name: String,
    pub password1: String,
    pub password2: String,
}

/// Login form fields
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `GET /signup` - renders the signup form
pub async fn signup_form(headers: HeaderMap) -> Response {
    render_page(&headers, views::signup_page)
}

/// `POST /signup` - registers a new account
///
/// Validation rules are checked in their fixed order and the first failure
/// is flashed back onto the form. A duplicate email is rejected whether it
/// is caught by the pre-check or by the unique constraint (two signups can
/// race past the pre-check). On success the user is signed in immediately
/// and sent to their task list.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> WebResult<Response> {
    let input = SignupInput {
        email: &form.email,
        user_name: &form.user_name,
        password1: &form.password1,
        password2: &form.password2,
    };
    if let Err(rule) = validate_signup(&input) {
        return Ok(redirect_with_flash("/signup", &rule.to_string()));
    }

    if User::find_by_email(&state.db, &form.email).await?.is_some() {
        return Ok(redirect_with_flash("/signup", "Email already registered"));
    }

    let password_hash = password::hash_password(&form.password1)?;

    let user = match User::create(
        &state.db,
        CreateUser {
            email: form.email,
            user_name: form.user_name,
            password_hash,
        },
    )
    .await
    {
        Ok(user) => user,
        Err(e) if User::is_duplicate_email(&e) => {
            return Ok(redirect_with_flash("/signup", "Email already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, "New account registered");
    Ok(signed_in_redirect(&state, user.id))
}

/// `GET /login` - renders the login form
pub async fn login_form(headers: HeaderMap) -> Response {
    render_page(&headers, views::login_page)
}

/// `POST /login` - authenticates and starts a session
///
/// An unknown email and a wrong password produce the same flash so the form
/// does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> WebResult<Response> {
    let Some(user) = User::find_by_email(&state.db, &form.email).await? else {
        return Ok(redirect_with_flash("/login", "Invalid email or password"));
    };

    if !password::verify_password(&form.password, &user.password_hash)? {
        return Ok(redirect_with_flash("/login", "Invalid email or password"));
    }

    tracing::info!(user_id = user.id, "User logged in");
    Ok(signed_in_redirect(&state, user.id))
}

/// `GET /logout` - clears the session cookie
///
/// The route sits behind the session middleware, so only an authenticated
/// request reaches this point.
pub async fn logout() -> Response {
    let mut response = Redirect::to("/login").into_response();
    let cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        session::SESSION_COOKIE
    );
    response
        .headers_mut()
        .append(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
    response
}

/// Issues a session cookie for `user_id` and redirects to the task list
fn signed_in_redirect(state: &AppState, user_id: i64) -> Response {
    let ttl = state.config.session.ttl_seconds;
    let token = session::issue_token(user_id, ttl, state.session_secret());

    let mut response = Redirect::to("/").into_response();
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        session::SESSION_COOKIE,
        token,
        ttl
    );
    response
        .headers_mut()
        // The token is digits, dots, and hex; always a valid header value
        .append(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
    response
}
