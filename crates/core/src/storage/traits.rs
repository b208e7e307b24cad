use async_trait::async_trait;

use crate::todo::Todo;

use super::Result;

/// Repository for todo operations.
///
/// Implementations are shared across concurrently handled requests, so each
/// call must be independently consistent. No call spans another.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists every todo, ordered by ascending ID.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Gets a todo by its ID.
    ///
    /// Returns `RepositoryError::NotFound` when no such todo exists.
    async fn get_todo(&self, id: i64) -> Result<Todo>;

    /// Creates a new todo and returns the ID assigned by storage.
    ///
    /// The `id` field of `todo` is ignored.
    async fn create_todo(&self, todo: &Todo) -> Result<i64>;

    /// Replaces every field of the todo matching `todo.id`.
    ///
    /// Returns `RepositoryError::NotFound` when no such todo exists.
    async fn update_todo(&self, todo: &Todo) -> Result<()>;

    /// Deletes a todo by its ID. Deleting a missing ID is not an error.
    async fn delete_todo(&self, id: i64) -> Result<()>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<()>;
}
