//! Error type shared by every fallible operation in the `api` crate.

/// Failures from the persistence, credential and session layers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("password hashing failed: {0}")]
    Password(String),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
