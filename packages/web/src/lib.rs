//! # Web crate: HTTP surface of the hospital administration app
//!
//! Builds the axum application: routes, the login guard, flash messages and
//! server-rendered pages. Persistence, credentials and session keys come from
//! the `api` crate.
//!
//! ## Request flow
//!
//! 1. `TraceLayer` logs the request.
//! 2. `SessionManagerLayer` loads the server-side session named by the signed
//!    cookie.
//! 3. Protected routes run [`guard::require_login`], which either redirects to
//!    `/login` or hands the handler a [`CurrentUser`](api::auth::CurrentUser).
//! 4. The handler validates input, touches the database and redirects with a
//!    flash message, or renders a page showing the pending messages.

use axum::Router;
use sha2::{Digest, Sha512};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{SessionManagerLayer, SessionStore};

pub mod error;
pub mod flash;
pub mod guard;
mod routes;
mod views;

pub use error::AppError;
pub use routes::router;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Derive the 64-byte cookie signing key from a secret of any length.
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// The full application: routes wrapped in signed-cookie sessions and tracing.
pub fn app<S>(state: AppState, store: S, secret: &str) -> Router
where
    S: SessionStore + Clone,
{
    let sessions = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_signed(session_key(secret));

    router(state)
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
}
