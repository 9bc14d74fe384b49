/// Integration tests for the User model
///
/// These run against an in-memory SQLite database; no external services are
/// required. Run with: cargo test --test user_tests

use taskboard_shared::db::migrations::run_migrations;
use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
use taskboard_shared::models::user::{CreateUser, User};
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations should run");
    pool
}

fn bob() -> CreateUser {
    CreateUser {
        email: "bob@example.com".to_string(),
        user_name: "bob".to_string(),
        password_hash: "$argon2id$v=19$m=65536,t=3,p=4$fake$fake".to_string(),
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamp() {
    let pool = test_pool().await;

    let user = User::create(&pool, bob()).await.expect("Create should succeed");

    assert!(user.id > 0);
    assert_eq!(user.email, "bob@example.com");
    assert_eq!(user.user_name, "bob");
}

#[tokio::test]
async fn test_find_by_id() {
    let pool = test_pool().await;
    let created = User::create(&pool, bob()).await.expect("Create should succeed");

    let found = User::find_by_id(&pool, created.id)
        .await
        .expect("Query should succeed")
        .expect("User should exist");
    assert_eq!(found.email, created.email);

    let missing = User::find_by_id(&pool, created.id + 999)
        .await
        .expect("Query should succeed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_by_email_is_case_insensitive() {
    let pool = test_pool().await;
    User::create(&pool, bob()).await.expect("Create should succeed");

    let found = User::find_by_email(&pool, "BOB@EXAMPLE.COM")
        .await
        .expect("Query should succeed");
    assert!(found.is_some(), "Email lookup should ignore case");
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let pool = test_pool().await;
    User::create(&pool, bob()).await.expect("First create should succeed");

    let second = CreateUser {
        user_name: "other".to_string(),
        ..bob()
    };
    let err = User::create(&pool, second)
        .await
        .expect_err("Second create should fail");

    assert!(
        User::is_duplicate_email(&err),
        "Error should be recognized as a duplicate email: {:?}",
        err
    );
}

#[tokio::test]
async fn test_duplicate_email_differs_only_in_case() {
    let pool = test_pool().await;
    User::create(&pool, bob()).await.expect("First create should succeed");

    let second = CreateUser {
        email: "Bob@Example.Com".to_string(),
        ..bob()
    };
    let err = User::create(&pool, second)
        .await
        .expect_err("Case-differing duplicate should fail");
    assert!(User::is_duplicate_email(&err));
}
