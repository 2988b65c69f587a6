//! # Database module: SQLite connection pool and migrations
//!
//! The pool is created once by the server binary and handed to every handler
//! through application state; nothing here is a process-wide singleton.
//!
//! ## Re-exports
//!
//! - [`connect`]: open a pool for a `sqlite://` URL, creating the file if needed.
//! - [`connect_in_memory`]: single-connection in-memory pool, used by tests.
//! - [`migrate`]: apply the embedded migrations in `packages/api/migrations`.

mod pool;

pub use pool::{connect, connect_in_memory, migrate};
