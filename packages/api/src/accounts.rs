//! # Account registration and password login
//!
//! [`register`] runs its checks in a fixed order (email and password present,
//! password confirmation, email, username) and then writes the user and its profile inside one
//! transaction, so a failure at any point leaves neither row behind.
//!
//! [`authenticate`] reports a single `None` for both an unknown email and a
//! wrong password; callers must not distinguish the two.

use sqlx::SqlitePool;

use crate::error::{Error, Result};
use crate::models::{NewProfile, Profile, User};

/// Gender choice that defers to the free-text `gender_self_describe` field.
pub const SELF_DESCRIBE: &str = "self-describe";

/// Everything submitted on the registration form.
#[derive(Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub gender_self_describe: String,
    pub referral_source: String,
    pub username: String,
}

/// Why a registration was refused. The display text is shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Fill all fields")]
    MissingCredentials,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Email already registered.")]
    EmailTaken,
    #[error("Username already taken.")]
    UsernameTaken,
    #[error(transparent)]
    Store(#[from] Error),
}

impl Registration {
    /// Gender to store: the self-description when chosen and non-blank.
    fn effective_gender(&self) -> &str {
        let described = self.gender_self_describe.trim();
        if self.gender.trim() == SELF_DESCRIBE && !described.is_empty() {
            described
        } else {
            self.gender.trim()
        }
    }

    fn username(&self) -> Option<&str> {
        Some(self.username.trim()).filter(|name| !name.is_empty())
    }

    fn profile(&self) -> NewProfile {
        NewProfile {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.trim().to_string(),
            gender: self.effective_gender().to_string(),
            referral_source: self.referral_source.trim().to_string(),
            username: self.username().map(str::to_string),
        }
    }
}

/// Create a user and its profile.
pub async fn register(
    form: &Registration,
    pool: &SqlitePool,
) -> Result<(User, Profile), RegistrationError> {
    if form.email.trim().is_empty() || form.password.trim().is_empty() {
        return Err(RegistrationError::MissingCredentials);
    }
    if form.password != form.confirm_password {
        return Err(RegistrationError::PasswordMismatch);
    }

    let mut tx = pool.begin().await.map_err(Error::from)?;

    if User::email_exists(&form.email, &mut *tx).await? {
        return Err(RegistrationError::EmailTaken);
    }
    if let Some(username) = form.username() {
        if Profile::username_exists(username, &mut *tx).await? {
            return Err(RegistrationError::UsernameTaken);
        }
    }

    let mut user = User::new(&form.email, &form.role);
    user.set_password(&form.password)?;
    let user = user.insert(&mut *tx).await?;
    let profile = form.profile().insert(user.id, &mut *tx).await?;

    tx.commit().await.map_err(Error::from)?;

    tracing::info!(user_id = user.id, email = %user.email, role = %user.role, "Registered user");
    Ok((user, profile))
}

/// Look up `email` and verify `password`. `None` on any mismatch.
pub async fn authenticate(email: &str, password: &str, pool: &SqlitePool) -> Result<Option<User>> {
    let user = User::find_by_email(email, pool).await?;
    Ok(user.filter(|user| user.check_password(password)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    fn registration(email: &str, password: &str, confirm: &str, role: &str) -> Registration {
        Registration {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            role: role.into(),
            ..Default::default()
        }
    }

    async fn user_count(pool: &SqlitePool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    #[tokio::test]
    async fn test_register_creates_user_and_profile() {
        let pool = connect_in_memory().await.unwrap();
        let mut form = registration("A@X.com", "pw1", "pw1", "Doctor");
        form.first_name = "Ada".into();
        form.username = "ada".into();

        let (user, profile) = register(&form, &pool).await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, "Doctor");
        assert_eq!(profile.user_id, user.id);
        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.username.as_deref(), Some("ada"));

        let stored = Profile::find_by_user(user.id, &pool).await.unwrap().unwrap();
        assert_eq!(stored.id, profile.id);
    }

    #[tokio::test]
    async fn test_blank_credentials_create_nothing() {
        let pool = connect_in_memory().await.unwrap();
        let result = register(&registration("", "", "", ""), &pool).await;
        assert!(matches!(result, Err(RegistrationError::MissingCredentials)));
        let result = register(&registration("a@x.com", "  ", "  ", ""), &pool).await;
        assert!(matches!(result, Err(RegistrationError::MissingCredentials)));
        assert_eq!(user_count(&pool).await, 0);
        assert!(authenticate("", "", &pool).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mismatched_passwords_create_nothing() {
        let pool = connect_in_memory().await.unwrap();
        let result = register(&registration("a@x.com", "pw1", "pw2", ""), &pool).await;
        assert!(matches!(result, Err(RegistrationError::PasswordMismatch)));
        assert_eq!(user_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let pool = connect_in_memory().await.unwrap();
        register(&registration("a@x.com", "pw", "pw", ""), &pool).await.unwrap();
        let result = register(&registration(" A@x.com", "pw", "pw", ""), &pool).await;
        assert!(matches!(result, Err(RegistrationError::EmailTaken)));
        assert_eq!(user_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_leaves_no_user() {
        let pool = connect_in_memory().await.unwrap();
        let mut first = registration("a@x.com", "pw", "pw", "");
        first.username = "ada".into();
        register(&first, &pool).await.unwrap();

        let mut second = registration("b@x.com", "pw", "pw", "");
        second.username = " ada ".into();
        let result = register(&second, &pool).await;
        assert!(matches!(result, Err(RegistrationError::UsernameTaken)));
        assert_eq!(user_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_blank_usernames_do_not_collide() {
        let pool = connect_in_memory().await.unwrap();
        register(&registration("a@x.com", "pw", "pw", ""), &pool).await.unwrap();
        let (_, profile) = register(&registration("b@x.com", "pw", "pw", ""), &pool)
            .await
            .unwrap();
        assert_eq!(profile.username, None);
    }

    #[test]
    fn test_self_described_gender() {
        let mut form = registration("a@x.com", "pw", "pw", "");
        form.gender = SELF_DESCRIBE.into();
        form.gender_self_describe = " agender ".into();
        assert_eq!(form.profile().gender, "agender");

        form.gender_self_describe = "  ".into();
        assert_eq!(form.profile().gender, SELF_DESCRIBE);

        form.gender = "female".into();
        form.gender_self_describe = "ignored".into();
        assert_eq!(form.profile().gender, "female");
    }

    #[tokio::test]
    async fn test_authenticate() {
        let pool = connect_in_memory().await.unwrap();
        register(&registration("a@x.com", "pw1", "pw1", "Doctor"), &pool)
            .await
            .unwrap();

        let user = authenticate(" A@X.COM ", "pw1", &pool).await.unwrap().unwrap();
        assert_eq!(user.role, "Doctor");
        assert!(authenticate("a@x.com", "wrong", &pool).await.unwrap().is_none());
        assert!(authenticate("nobody@x.com", "pw1", &pool).await.unwrap().is_none());
    }
}
