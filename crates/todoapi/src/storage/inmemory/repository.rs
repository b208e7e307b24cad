//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoapi_core::storage::{RepositoryError, Result, TodoRepository};
use todoapi_core::todo::Todo;

/// In-memory storage backend.
///
/// Identifiers come from a monotonic sequence starting at 1 and are never
/// reused, matching an `AUTOINCREMENT` primary key.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<BTreeMap<i64, Todo>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn get_todo(&self, id: i64) -> Result<Todo> {
        let todos = self.todos.read().await;
        todos
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::todo_not_found(id))
    }

    async fn create_todo(&self, todo: &Todo) -> Result<i64> {
        let mut todos = self.todos.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        todos.insert(id, todo.clone().with_id(id));
        Ok(id)
    }

    async fn update_todo(&self, todo: &Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        let stored = todos
            .get_mut(&todo.id)
            .ok_or_else(|| RepositoryError::todo_not_found(todo.id))?;
        *stored = todo.clone();
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        self.todos.write().await.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();
        let todo = Todo::new("Buy milk").with_description("2 liters");

        let id = repo.create_todo(&todo).await.unwrap();

        let retrieved = repo.get_todo(id).await.unwrap();
        assert_eq!(retrieved, todo.with_id(id));
    }

    #[tokio::test]
    async fn test_create_ignores_input_id() {
        let repo = InMemoryRepository::new();

        let id = repo.create_todo(&Todo::new("First").with_id(99)).await.unwrap();

        assert_eq!(id, 1);
        assert!(repo.get_todo(99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let repo = InMemoryRepository::new();

        let first = repo.create_todo(&Todo::new("a")).await.unwrap();
        let second = repo.create_todo(&Todo::new("b")).await.unwrap();
        repo.delete_todo(second).await.unwrap();
        let third = repo.create_todo(&Todo::new("c")).await.unwrap();

        assert_eq!((first, second, third), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_todo(1).await;
        assert_eq!(result, Err(RepositoryError::todo_not_found(1)));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryRepository::new();
        for title in ["one", "two", "three"] {
            repo.create_todo(&Todo::new(title)).await.unwrap();
        }

        let todos = repo.list_todos().await.unwrap();

        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryRepository::new();
        let id = repo
            .create_todo(&Todo::new("Original").with_description("old"))
            .await
            .unwrap();

        let replacement = Todo::new("Updated").with_done(true).with_id(id);
        repo.update_todo(&replacement).await.unwrap();

        let retrieved = repo.get_todo(id).await.unwrap();
        assert_eq!(retrieved, replacement);
        assert_eq!(retrieved.description, "");
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.update_todo(&Todo::new("Ghost").with_id(5)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let id = repo.create_todo(&Todo::new("Short lived")).await.unwrap();

        repo.delete_todo(id).await.unwrap();

        assert!(repo.get_todo(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete_todo(404).await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();

        let id = clone.create_todo(&Todo::new("Shared")).await.unwrap();

        assert_eq!(repo.get_todo(id).await.unwrap().title, "Shared");
    }
}
