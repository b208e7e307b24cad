//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`TodoRepository`]
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. `tokio-rusqlite` runs every call on a dedicated thread, which
//! serializes access to the connection.
//!
//! [`TodoRepository`]: todoapi_core::storage::TodoRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
