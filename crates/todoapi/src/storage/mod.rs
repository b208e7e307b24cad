//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `todoapi_core::storage`.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! The in-memory backend is always compiled. It is used by the tests and by
//! builds without the `sqlite` feature.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p todoapi
//! ```
//!
//! Build with the in-memory backend only:
//! ```bash
//! cargo build -p todoapi --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
