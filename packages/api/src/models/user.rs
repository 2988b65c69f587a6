//! # User model: login identity
//!
//! A [`User`] row holds the normalized email, the Argon2id PHC hash of the
//! password and a free-text role. Passwords enter and leave this type only
//! through [`User::set_password`] and [`User::check_password`]; the raw value
//! is never stored or logged.

use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::auth::{hash_password, verify_password};
use crate::error::Result;

/// Role stored when registration does not name one.
pub const DEFAULT_ROLE: &str = "receptionist";

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Canonical form of an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl User {
    /// Build an unsaved user. The password hash is empty until
    /// [`set_password`](Self::set_password) is called.
    pub fn new(email: &str, role: &str) -> Self {
        let role = match role.trim() {
            "" => DEFAULT_ROLE,
            role => role,
        };
        Self {
            id: 0,
            email: normalize_email(email),
            password_hash: String::new(),
            role: role.to_string(),
        }
    }

    /// Hash `raw` with a fresh salt and store the result on this record.
    pub fn set_password(&mut self, raw: &str) -> Result<()> {
        self.password_hash = hash_password(raw)?;
        Ok(())
    }

    /// Check `raw` against the stored hash. A malformed hash never matches.
    pub fn check_password(&self, raw: &str) -> bool {
        verify_password(raw, &self.password_hash).unwrap_or(false)
    }

    pub async fn find(id: i64, pool: &SqlitePool) -> Result<Option<User>> {
        Ok(sqlx::query_as("SELECT id, email, password_hash, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Look up a user by email, normalizing the input first.
    pub async fn find_by_email(email: &str, pool: &SqlitePool) -> Result<Option<User>> {
        Ok(sqlx::query_as("SELECT id, email, password_hash, role FROM users WHERE email = ?")
            .bind(normalize_email(email))
            .fetch_optional(pool)
            .await?)
    }

    pub async fn email_exists(email: &str, conn: &mut SqliteConnection) -> Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = ?")
            .bind(normalize_email(email))
            .fetch_optional(conn)
            .await?;
        Ok(row.is_some())
    }

    /// Insert this user and return the stored row with its generated id.
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<User> {
        Ok(sqlx::query_as(
            "INSERT INTO users (email, password_hash, role) VALUES (?, ?, ?) \
             RETURNING id, email, password_hash, role",
        )
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(&self.role)
        .fetch_one(conn)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    #[test]
    fn test_new_normalizes_email_and_defaults_role() {
        let user = User::new("  Nurse@Example.COM ", "");
        assert_eq!(user.email, "nurse@example.com");
        assert_eq!(user.role, DEFAULT_ROLE);

        let user = User::new("a@x.com", "Doctor");
        assert_eq!(user.role, "Doctor");
    }

    #[test]
    fn test_password_round_trip() {
        let mut user = User::new("a@x.com", "admin");
        user.set_password("pw1").unwrap();
        assert_ne!(user.password_hash, "pw1");
        assert!(user.password_hash.len() <= 256);
        assert!(user.check_password("pw1"));
        assert!(!user.check_password("pw2"));
    }

    #[test]
    fn test_unset_password_never_matches() {
        let user = User::new("a@x.com", "admin");
        assert!(!user.check_password(""));
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let pool = connect_in_memory().await.unwrap();
        let mut user = User::new("A@X.com", "Doctor");
        user.set_password("pw1").unwrap();

        let mut conn = pool.acquire().await.unwrap();
        assert!(!User::email_exists("a@x.com", &mut *conn).await.unwrap());
        let saved = user.insert(&mut *conn).await.unwrap();
        assert!(User::email_exists("A@x.COM", &mut *conn).await.unwrap());
        drop(conn);

        let found = User::find_by_email(" a@x.com ", &pool).await.unwrap().unwrap();
        assert_eq!(found.id, saved.id);
        assert_eq!(found.role, "Doctor");
        assert!(found.check_password("pw1"));

        let by_id = User::find(saved.id, &pool).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_constraint() {
        let pool = connect_in_memory().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let mut user = User::new("a@x.com", "");
        user.set_password("pw").unwrap();
        user.insert(&mut *conn).await.unwrap();
        assert!(user.insert(&mut *conn).await.is_err());
    }
}
