/// User model and database operations
///
/// Users exist only in the authenticated variant. An account is created at
/// signup and never updated or deleted afterwards; there is deliberately no
/// update or delete operation here.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     email TEXT NOT NULL UNIQUE COLLATE NOCASE,
///     user_name TEXT NOT NULL,
///     password_hash TEXT NOT NULL,
///     created_at TEXT NOT NULL
/// );
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A registered account
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Numeric surrogate key
    pub id: i64,

    /// Login identifier; unique, compared case-insensitively
    pub email: String,

    /// Display name shown in the task list header
    pub user_name: String,

    /// Argon2id password hash (PHC string)
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub user_name: String,

    /// Argon2id password hash (NOT the plaintext password)
    pub password_hash: String,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns a database error if the email already exists (unique
    /// constraint violation) or the connection fails.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, user_name, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, user_name, password_hash, created_at
            "#,
        )
        .bind(data.email)
        .bind(data.user_name)
        .bind(data.password_hash)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID, `None` if absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, user_name, password_hash, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address, `None` if absent
    ///
    /// The lookup is case-insensitive (NOCASE collation on the column).
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, user_name, password_hash, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Returns whether a sqlx error is the email-uniqueness violation
    ///
    /// SQLite reports the violated constraint as "UNIQUE constraint failed:
    /// users.email"; signup handlers translate that into a duplicate-email
    /// rejection rather than a server error.
    pub fn is_duplicate_email(err: &sqlx::Error) -> bool {
        match err {
            sqlx::Error::Database(db_err) => {
                db_err.is_unique_violation() && db_err.message().contains("users.email")
            }
            _ => false,
        }
    }
}
