//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the repository as a trait object, so the
//! backend is chosen once at startup.

use std::sync::Arc;

use todoapi_core::storage::TodoRepository;

use crate::handlers::TodoHandler;
use crate::storage::InMemoryRepository;

#[cfg(feature = "sqlite")]
use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// Cloned for each request; every field is a cheap handle to shared data.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository.
    pub todo_repo: Arc<dyn TodoRepository>,
    /// Request handler for the todo resource.
    pub todos: TodoHandler,
}

impl AppState {
    /// Creates a new AppState on top of the given repository.
    pub fn new(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            todos: TodoHandler::new(todo_repo.clone()),
            todo_repo,
        }
    }

    /// Creates an AppState backed by the in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }

    /// Creates an AppState backed by the SQLite database named in `config`.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(
        config: &Config,
    ) -> Result<Self, todoapi_core::storage::RepositoryError> {
        let repo = SqliteRepository::from_config(config).await?;
        Ok(Self::new(Arc::new(repo)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
