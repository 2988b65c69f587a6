//! Session keys and the signed-in principal.
//!
//! The session is server-side; the client only carries its signed id. Once
//! authenticated it holds the user's id under [`SESSION_USER_ID_KEY`] and role
//! under [`SESSION_USER_ROLE_KEY`]. There is no expiry: a session lasts until
//! [`sign_out`] clears it.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Result;
use crate::models::User;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Key for storing the user's role in session.
pub const SESSION_USER_ROLE_KEY: &str = "user_role";

/// The authenticated principal of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub role: String,
}

/// Bind `user` to the session under a fresh session id.
pub async fn sign_in(session: &Session, user: &User) -> Result<()> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user.id).await?;
    session.insert(SESSION_USER_ROLE_KEY, &user.role).await?;
    Ok(())
}

/// The signed-in user, or `None` for an anonymous session.
pub async fn current_user(session: &Session) -> Result<Option<CurrentUser>> {
    let Some(id) = session.get::<i64>(SESSION_USER_ID_KEY).await? else {
        return Ok(None);
    };
    let role = session
        .get::<String>(SESSION_USER_ROLE_KEY)
        .await?
        .unwrap_or_default();
    Ok(Some(CurrentUser { id, role }))
}

/// Drop every value in the session and delete it from the store.
pub async fn sign_out(session: &Session) -> Result<()> {
    session.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn user(id: i64, role: &str) -> User {
        User {
            id,
            email: "a@x.com".into(),
            password_hash: String::new(),
            role: role.into(),
        }
    }

    #[tokio::test]
    async fn test_anonymous_session() {
        let session = session();
        assert_eq!(current_user(&session).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let session = session();
        sign_in(&session, &user(7, "Doctor")).await.unwrap();
        assert_eq!(
            current_user(&session).await.unwrap(),
            Some(CurrentUser {
                id: 7,
                role: "Doctor".into()
            })
        );

        sign_out(&session).await.unwrap();
        assert_eq!(current_user(&session).await.unwrap(), None);
    }
}
