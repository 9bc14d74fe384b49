/// Task model and database operations
///
/// Tasks are the unit of work: title, description, due date, completed flag,
/// and (in the authenticated variant) an owning user. The completed flag
/// changes only through [`Task::toggle`]; there is no edit-in-place for
/// title, description, or due date, and an owner is never reassigned.
///
/// Mutating operations take an `owner` parameter and refuse to touch a task
/// that belongs to someone else. The anonymous variant passes `None`, which
/// skips the check because its tasks are unowned.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     due_date TEXT NOT NULL,
///     completed INTEGER NOT NULL DEFAULT 0,
///     user_id INTEGER REFERENCES users (id)
/// );
/// ```
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;

/// Error type for task operations
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task exists with the requested id
    #[error("Task {0} not found")]
    NotFound(i64),

    /// The task exists but belongs to a different owner
    #[error("Task {0} belongs to another user")]
    Forbidden(i64),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A to-do item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Numeric surrogate key
    pub id: i64,

    /// Short title shown in the list
    pub title: String,

    /// Longer free-form description
    pub description: String,

    /// Calendar due date (no time-of-day)
    pub due_date: NaiveDate,

    /// Completion flag; false at creation, flipped only via toggle
    pub completed: bool,

    /// Owning user, `None` in the anonymous variant
    pub user_id: Option<i64>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,

    /// Owner, `None` in the anonymous variant
    pub user_id: Option<i64>,
}

impl Task {
    /// Whether the task is past due relative to `today` and still open
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    /// Creates a new task with `completed = false`
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, due_date, completed, user_id)
            VALUES (?, ?, ?, 0, ?)
            RETURNING id, title, description, due_date, completed, user_id
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.due_date)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists tasks, filtered by owner when `owner` is `Some`
    ///
    /// Ordered by id, which matches insertion order.
    pub async fn list(pool: &SqlitePool, owner: Option<i64>) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT id, title, description, due_date, completed, user_id
                    FROM tasks
                    WHERE user_id = ?
                    ORDER BY id
                    "#,
                )
                .bind(user_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT id, title, description, due_date, completed, user_id
                    FROM tasks
                    ORDER BY id
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(tasks)
    }

    /// Finds a task by ID, `None` if absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, due_date, completed, user_id
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Flips the completed flag of a task
    ///
    /// # Errors
    ///
    /// - `TaskError::NotFound` if no task has this id
    /// - `TaskError::Forbidden` if `owner` is `Some` and does not match the
    ///   task's owner
    pub async fn toggle(
        pool: &SqlitePool,
        id: i64,
        owner: Option<i64>,
    ) -> Result<Self, TaskError> {
        let task = Self::find_by_id(pool, id)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        task.check_owner(owner)?;

        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET completed = NOT completed
            WHERE id = ?
            RETURNING id, title, description, due_date, completed, user_id
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Permanently deletes a task
    ///
    /// Same `NotFound`/`Forbidden` contract as [`Task::toggle`].
    pub async fn delete(pool: &SqlitePool, id: i64, owner: Option<i64>) -> Result<(), TaskError> {
        let task = Self::find_by_id(pool, id)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        task.check_owner(owner)?;

        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    fn check_owner(&self, owner: Option<i64>) -> Result<(), TaskError> {
        match owner {
            Some(user_id) if self.user_id != Some(user_id) => Err(TaskError::Forbidden(self.id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool, due: NaiveDate) -> Task {
        Task {
            id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            due_date: due,
            completed,
            user_id: None,
        }
    }

    #[test]
    fn test_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

        assert!(task(false, yesterday).is_overdue(today));
        assert!(!task(true, yesterday).is_overdue(today));
        assert!(!task(false, today).is_overdue(today));
    }

    // Database-backed tests are in tests/task_tests.rs
}
