//! Extended account details attached 1:1 to a [`User`](super::User).

use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::error::Result;

#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub referral_source: String,
    pub username: Option<String>,
}

/// Profile values collected at registration.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub referral_source: String,
    pub username: Option<String>,
}

impl Profile {
    pub async fn find_by_user(user_id: i64, pool: &SqlitePool) -> Result<Option<Profile>> {
        Ok(sqlx::query_as("SELECT * FROM profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn username_exists(username: &str, conn: &mut SqliteConnection) -> Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM profiles WHERE username = ?")
            .bind(username)
            .fetch_optional(conn)
            .await?;
        Ok(row.is_some())
    }
}

impl NewProfile {
    pub async fn insert(&self, user_id: i64, conn: &mut SqliteConnection) -> Result<Profile> {
        Ok(sqlx::query_as(
            "INSERT INTO profiles \
             (user_id, first_name, last_name, address, gender, referral_source, username) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(user_id)
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.address)
        .bind(&self.gender)
        .bind(&self.referral_source)
        .bind(&self.username)
        .fetch_one(conn)
        .await?)
    }
}
