/// Integration tests for the Task model
///
/// These run against an in-memory SQLite database; no external services are
/// required. Run with: cargo test --test task_tests

use chrono::NaiveDate;
use sqlx::SqlitePool;
use taskboard_shared::db::migrations::run_migrations;
use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
use taskboard_shared::models::task::{CreateTask, Task, TaskError};
use taskboard_shared::models::user::{CreateUser, User};

async fn test_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations should run");
    pool
}

async fn make_user(pool: &SqlitePool, email: &str) -> User {
    User::create(
        pool,
        CreateUser {
            email: email.to_string(),
            user_name: "tester".to_string(),
            password_hash: "$argon2id$v=19$m=65536,t=3,p=4$fake$fake".to_string(),
        },
    )
    .await
    .expect("Create user should succeed")
}

fn groceries(user_id: Option<i64>) -> CreateTask {
    CreateTask {
        title: "Buy groceries".to_string(),
        description: "Milk, eggs, bread".to_string(),
        due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        user_id,
    }
}

#[tokio::test]
async fn test_create_defaults_to_not_completed() {
    let pool = test_pool().await;

    let task = Task::create(&pool, groceries(None))
        .await
        .expect("Create should succeed");

    assert!(task.id > 0);
    assert!(!task.completed);
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(task.user_id, None);
}

#[tokio::test]
async fn test_list_unfiltered_returns_everything() {
    let pool = test_pool().await;
    Task::create(&pool, groceries(None)).await.expect("Create should succeed");
    Task::create(&pool, groceries(None)).await.expect("Create should succeed");

    let tasks = Task::list(&pool, None).await.expect("List should succeed");
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn test_list_filters_by_owner() {
    let pool = test_pool().await;
    let alice = make_user(&pool, "alice@example.com").await;
    let bob = make_user(&pool, "bob@example.com").await;

    Task::create(&pool, groceries(Some(alice.id))).await.expect("Create should succeed");
    Task::create(&pool, groceries(Some(alice.id))).await.expect("Create should succeed");
    Task::create(&pool, groceries(Some(bob.id))).await.expect("Create should succeed");

    let alices = Task::list(&pool, Some(alice.id)).await.expect("List should succeed");
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|t| t.user_id == Some(alice.id)));

    let bobs = Task::list(&pool, Some(bob.id)).await.expect("List should succeed");
    assert_eq!(bobs.len(), 1);
}

#[tokio::test]
async fn test_double_toggle_restores_original_state() {
    let pool = test_pool().await;
    let task = Task::create(&pool, groceries(None)).await.expect("Create should succeed");

    let toggled = Task::toggle(&pool, task.id, None).await.expect("Toggle should succeed");
    assert!(toggled.completed);

    let toggled_back = Task::toggle(&pool, task.id, None).await.expect("Toggle should succeed");
    assert!(!toggled_back.completed);
}

#[tokio::test]
async fn test_toggle_missing_task_is_not_found() {
    let pool = test_pool().await;

    let err = Task::toggle(&pool, 9999, None)
        .await
        .expect_err("Toggle of missing task should fail");
    assert!(matches!(err, TaskError::NotFound(9999)));
}

#[tokio::test]
async fn test_toggle_other_users_task_is_forbidden() {
    let pool = test_pool().await;
    let alice = make_user(&pool, "alice@example.com").await;
    let bob = make_user(&pool, "bob@example.com").await;
    let task = Task::create(&pool, groceries(Some(alice.id)))
        .await
        .expect("Create should succeed");

    let err = Task::toggle(&pool, task.id, Some(bob.id))
        .await
        .expect_err("Toggle by non-owner should fail");
    assert!(matches!(err, TaskError::Forbidden(_)));

    // The task is untouched
    let unchanged = Task::find_by_id(&pool, task.id)
        .await
        .expect("Query should succeed")
        .expect("Task should still exist");
    assert!(!unchanged.completed);
}

#[tokio::test]
async fn test_delete_removes_task_from_list() {
    let pool = test_pool().await;
    let task = Task::create(&pool, groceries(None)).await.expect("Create should succeed");

    Task::delete(&pool, task.id, None).await.expect("Delete should succeed");

    let tasks = Task::list(&pool, None).await.expect("List should succeed");
    assert!(tasks.is_empty());

    let gone = Task::find_by_id(&pool, task.id).await.expect("Query should succeed");
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_delete_missing_task_is_not_found() {
    let pool = test_pool().await;

    let err = Task::delete(&pool, 9999, None)
        .await
        .expect_err("Delete of missing task should fail");
    assert!(matches!(err, TaskError::NotFound(9999)));
}

#[tokio::test]
async fn test_delete_other_users_task_is_forbidden() {
    let pool = test_pool().await;
    let alice = make_user(&pool, "alice@example.com").await;
    let bob = make_user(&pool, "bob@example.com").await;
    let task = Task::create(&pool, groceries(Some(alice.id)))
        .await
        .expect("Create should succeed");

    let err = Task::delete(&pool, task.id, Some(bob.id))
        .await
        .expect_err("Delete by non-owner should fail");
    assert!(matches!(err, TaskError::Forbidden(_)));

    let still_there = Task::find_by_id(&pool, task.id).await.expect("Query should succeed");
    assert!(still_there.is_some());
}

#[tokio::test]
async fn test_owner_can_toggle_and_delete_own_task() {
    let pool = test_pool().await;
    let alice = make_user(&pool, "alice@example.com").await;
    let task = Task::create(&pool, groceries(Some(alice.id)))
        .await
        .expect("Create should succeed");

    let toggled = Task::toggle(&pool, task.id, Some(alice.id))
        .await
        .expect("Owner toggle should succeed");
    assert!(toggled.completed);

    Task::delete(&pool, task.id, Some(alice.id))
        .await
        .expect("Owner delete should succeed");
}
