/// Task list endpoints
///
/// # Endpoints
///
/// - `GET  /`           - Render the current user's task list
/// - `POST /add`        - Create a task
/// - `GET  /update/:id` - Toggle a task's completed flag
/// - `GET  /delete/:id` - Delete a task
///
/// All four sit behind the session middleware; every mutation passes the
/// current user as the owner, so toggling or deleting someone else's task by
/// guessing its id is refused. A missing id and a foreign id are both
/// recovered with a flash message, never a crash.
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use taskboard_shared::models::task::{CreateTask, Task, TaskError};

use crate::{
    app::{AppState, CurrentUser},
    error::WebResult,
    flash::{redirect_with_flash, render_page},
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
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let tasks = Task::list(&state.db, Some(user.id)).await?;
    let today = Utc::now().date_naive();

    Ok(render_page(&headers, |flash| {
        views::task_list_page(&user.user_name, &tasks, today, flash)
    }))
}

/// `POST /add` - creates a task owned by the current user
///
/// A malformed due date is a recovered validation failure: the list is shown
/// again with a flash, nothing is persisted.
pub async fn add(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<AddTaskForm>,
) -> WebResult<Response> {
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
            user_id: Some(user.id),
        },
    )
    .await?;

    tracing::debug!(task_id = task.id, user_id = user.id, "Task created");
    Ok(Redirect::to("/").into_response())
}

/// `GET /update/:id` - toggles a task's completed flag
pub async fn toggle(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    match Task::toggle(&state.db, id, Some(user.id)).await {
        Ok(task) => {
            tracing::debug!(task_id = task.id, completed = task.completed, "Task toggled");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => Ok(recover_task_error(e, user.id)?),
    }
}

/// `GET /delete/:id` - permanently deletes a task
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    match Task::delete(&state.db, id, Some(user.id)).await {
        Ok(()) => {
            tracing::debug!(task_id = id, user_id = user.id, "Task deleted");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => Ok(recover_task_error(e, user.id)?),
    }
}

/// Maps task service failures to user-visible recoveries
///
/// NotFound and Forbidden both come back as a flash on the list page; the
/// Forbidden case is additionally logged since it means someone probed a
/// task id that is not theirs.
fn recover_task_error(err: TaskError, user_id: i64) -> WebResult<Response> {
    match err {
        TaskError::NotFound(_) => Ok(redirect_with_flash("/", "That task no longer exists")),
        TaskError::Forbidden(task_id) => {
            tracing::warn!(task_id, user_id, "Refused access to another user's task");
            Ok(redirect_with_flash("/", "That task belongs to another user"))
        }
        TaskError::Database(e) => Err(e.into()),
    }
}
