//! # API crate: persistence, credentials and sessions for the hospital app
//!
//! Everything the HTTP layer needs below the request handlers lives here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`accounts`] | registration (user + profile in one transaction) and password login |
//! | [`auth`] | Argon2id hashing, session keys, sign-in / sign-out helpers |
//! | [`db`] | SQLite pool construction and embedded migrations |
//! | [`models`] | `User`, `Profile`, `Patient`, `Doctor` rows and form validation |
//! | [`settings`] | layered configuration (defaults, `config.toml`, environment) |

pub mod accounts;
pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod settings;

pub use error::{Error, Result};
pub use settings::Settings;
