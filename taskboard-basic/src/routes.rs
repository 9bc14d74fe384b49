/// Route handlers for the anonymous variant
///
/// # Endpoints
///
/// - `GET  /`           - Render the shared task list
/// - `POST /add`        - Create a task
/// - `GET  /update/:id` - Toggle a task's completed flag
/// - `GET  /delete/:id` - Delete a task
/// - `GET  /health`     - Liveness + db ping
///
/// Tasks are unowned here, so every mutation passes `None` as the owner and
/// the ownership check is skipped. A missing id is still recovered with a
/// flash rather than a crash.
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use taskboard_shared::auth::session::cookie_value;
use taskboard_shared::db::pool::health_check as db_health_check;
use taskboard_shared::models::task::{CreateTask, Task, TaskError};

use crate::{
    app::AppState,
    error::AppResult,
    views,
};

/// Add-task form fields
#[derive(Debug, Deserialize)]
pub struct AddTaskForm {
    pub title: String,
    pub description: String,

    /// ISO calendar date, `YYYY-MM-DD`
    pub due_date: String,
}

/// `GET /` - renders the task list
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let tasks = Task::list(&state.db, None).await?;
    let today = Utc::now().date_naive();

    let message = take_flash(&headers);
    let mut response =
        Html(views::task_list_page(&tasks, today, message.as_deref())).into_response();
    if message.is_some() {
        clear_flash(&mut response);
    }
    Ok(response)
}

/// `POST /add` - creates an unowned task
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddTaskForm>,
) -> AppResult<Response> {
    let due_date = match NaiveDate::parse_from_str(form.due_date.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return Ok(redirect_with_flash(
                "/",
                "Due date must be a valid date in YYYY-MM-DD format",
            ));
        }
    };

    let task = Task::create(
        &state.db,
        CreateTask {
            title: form.title,
            description: form.description,
            due_date,
            user_id: None,
        },
    )
    .await?;

    tracing::debug!(task_id = task.id, "Task created");
    Ok(Redirect::to("/").into_response())
}

/// `GET /update/:id` - toggles a task's completed flag
pub async fn toggle(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Response> {
    match Task::toggle(&state.db, id, None).await {
        Ok(task) => {
            tracing::debug!(task_id = task.id, completed = task.completed, "Task toggled");
            Ok(Redirect::to("/").into_response())
        }
        // Forbidden cannot occur with owner = None; folded in for totality
        Err(TaskError::NotFound(_)) | Err(TaskError::Forbidden(_)) => {
            Ok(redirect_with_flash("/", "That task no longer exists"))
        }
        Err(TaskError::Database(e)) => Err(e.into()),
    }
}

/// `GET /delete/:id` - permanently deletes a task
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Response> {
    match Task::delete(&state.db, id, None).await {
        Ok(()) => {
            tracing::debug!(task_id = id, "Task deleted");
            Ok(Redirect::to("/").into_response())
        }
        Err(TaskError::NotFound(_)) | Err(TaskError::Forbidden(_)) => {
            Ok(redirect_with_flash("/", "That task no longer exists"))
        }
        Err(TaskError::Database(e)) => Err(e.into()),
    }
}

/// `GET /health` - liveness check including a database ping
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match db_health_check(&state.db).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}

// One-shot flash cookie, hex-encoded to stay header-safe. Same scheme as the
// authenticated variant.

fn redirect_with_flash(to: &str, message: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    let cookie = format!(
        "flash={}; Path=/; HttpOnly; Max-Age=60",
        hex::encode(message.as_bytes())
    );
    response
        .headers_mut()
        .append(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
    response
}

fn take_flash(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    let value = cookie_value(raw, "flash")?;
    String::from_utf8(hex::decode(value).ok()?).ok()
}

fn clear_flash(response: &mut Response) {
    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_static("flash=; Path=/; HttpOnly; Max-Age=0"),
    );
}
