/**
 * User Model and Database Operations
 *
 * This module handles user records and their database operations.
 * Passwords are stored as bcrypt hashes; callers hash before insert and
 * verify against the stored hash on login.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// User struct representing a registered account
///
/// Email uniqueness is case-sensitive and enforced at write time, backed by
/// a UNIQUE constraint on the column.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Store-assigned id
    pub id: i64,
    /// Email address (unique, case-sensitive)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user with an already-hashed password.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO users (email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Get a user by exact email match, or None if not found.
pub async fn find_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get a user by id, or None if not found.
pub async fn find_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a user together with everything it owns.
///
/// Dependent sessions and topics are removed in the same transaction as the
/// user row, so no token and no orphaned topic survives account deletion.
pub async fn delete_user(pool: &SqlitePool, user_id: i64) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM sessions WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM topics WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions;
    use crate::topics::db as topics;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let pool = memory_pool().await;

        let user = create_user(&pool, "test@example.com", "hash").await.unwrap();
        assert_eq!(user.email, "test@example.com");

        let found = find_user_by_email(&pool, "test@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let pool = memory_pool().await;

        create_user(&pool, "test@example.com", "hash").await.unwrap();

        let found = find_user_by_email(&pool, "Test@Example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_constraint() {
        let pool = memory_pool().await;

        create_user(&pool, "test@example.com", "hash").await.unwrap();
        let result = create_user(&pool, "test@example.com", "other").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_user_cascades_sessions_and_topics() {
        let pool = memory_pool().await;

        let user = create_user(&pool, "doomed@example.com", "hash").await.unwrap();
        let other = create_user(&pool, "bystander@example.com", "hash")
            .await
            .unwrap();

        let session = sessions::create_session(&pool, user.id, Some("my Mac"))
            .await
            .unwrap();
        let topic = topics::create_topic(&pool, user.id, "mine", None).await.unwrap();
        let kept_session = sessions::create_session(&pool, other.id, None).await.unwrap();
        let kept_topic = topics::create_topic(&pool, other.id, "keep", None)
            .await
            .unwrap();

        delete_user(&pool, user.id).await.unwrap();

        assert!(find_user_by_id(&pool, user.id).await.unwrap().is_none());
        assert!(sessions::find_session(&pool, session.id)
            .await
            .unwrap()
            .is_none());
        assert!(topics::find_topic(&pool, topic.id).await.unwrap().is_none());

        // The other user's records are untouched.
        assert!(sessions::find_session(&pool, kept_session.id)
            .await
            .unwrap()
            .is_some());
        assert!(topics::find_topic(&pool, kept_topic.id)
            .await
            .unwrap()
            .is_some());
    }
}
