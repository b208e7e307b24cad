//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`TodoRepository`]
//! that keeps todos in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It backs the
//! router tests and is the active backend when the `sqlite` feature is off.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let id = repo.create_todo(&Todo::new("Buy milk")).await?;
//! ```
//!
//! [`TodoRepository`]: todoapi_core::storage::TodoRepository

mod repository;

pub use repository::InMemoryRepository;
