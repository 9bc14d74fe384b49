/// Database models
///
/// # Models
///
/// - `user`: Registered accounts (authenticated variant only)
/// - `task`: To-do items, optionally owned by a user
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{CreateTask, Task};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use chrono::NaiveDate;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(
///     &pool,
///     CreateTask {
///         title: "Water the plants".to_string(),
///         description: "Front porch and kitchen".to_string(),
///         due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///         user_id: None,
///     },
/// )
/// .await?;
/// assert!(!task.completed);
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
