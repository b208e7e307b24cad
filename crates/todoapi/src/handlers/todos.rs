//! Todo request handling.
//!
//! [`TodoHandler`] owns input validation and error translation for the todo
//! resource. Each method runs one linear flow: parse and validate input,
//! delegate to the repository, then write exactly one response through the
//! [`Context`].

use std::sync::Arc;

use todoapi_core::storage::{RepositoryError, TodoRepository};
use todoapi_core::todo::{parse_id, Todo};

use crate::context::Context;

const INVALID_ID: &str = "invalid id";

/// Handler for the todo resource, shared by every request.
#[derive(Clone)]
pub struct TodoHandler {
    storage: Arc<dyn TodoRepository>,
}

impl TodoHandler {
    pub fn new(storage: Arc<dyn TodoRepository>) -> Self {
        Self { storage }
    }

    /// List all todos (GET /todos).
    pub async fn list<C: Context>(&self, c: &mut C) {
        match self.storage.list_todos().await {
            Ok(todos) => c.ok(todos),
            Err(e) => storage_failure(c, e),
        }
    }

    /// Get a single todo by ID (GET /todos/{id}).
    pub async fn get<C: Context>(&self, c: &mut C) {
        let Ok(id) = parse_id(c.param("id")) else {
            return invalid_id(c);
        };

        match self.storage.get_todo(id).await {
            Ok(todo) => c.ok(todo),
            Err(e) => storage_failure(c, e),
        }
    }

    /// Create a new todo (POST /todos).
    pub async fn create<C: Context>(&self, c: &mut C) {
        let mut todo: Todo = match c.bind() {
            Ok(todo) => todo,
            Err(e) => return bad_request(c, e.to_string()),
        };

        match self.storage.create_todo(&todo).await {
            Ok(id) => {
                todo.id = id;
                tracing::info!(todo_id = id, title = %todo.title, "Created todo");
                c.created(todo);
            }
            Err(e) => storage_failure(c, e),
        }
    }

    /// Replace a todo by ID (PUT /todos/{id}).
    ///
    /// The path ID wins over any `id` in the body. The response echoes the
    /// todo as sent rather than re-reading it from storage.
    pub async fn update<C: Context>(&self, c: &mut C) {
        let Ok(id) = parse_id(c.param("id")) else {
            return invalid_id(c);
        };

        let mut todo: Todo = match c.bind() {
            Ok(todo) => todo,
            Err(e) => return bad_request(c, e.to_string()),
        };
        todo.id = id;

        match self.storage.update_todo(&todo).await {
            Ok(()) => {
                tracing::info!(todo_id = id, "Updated todo");
                c.ok(todo);
            }
            Err(e) => storage_failure(c, e),
        }
    }

    /// Delete a todo by ID (DELETE /todos/{id}).
    ///
    /// Succeeds whether or not the todo existed.
    pub async fn delete<C: Context>(&self, c: &mut C) {
        let id = match parse_id(c.param("id")) {
            Ok(id) => id,
            Err(e) => return bad_request(c, e.to_string()),
        };

        match self.storage.delete_todo(id).await {
            Ok(()) => {
                tracing::info!(todo_id = id, "Deleted todo");
                c.ok(());
            }
            Err(e) => storage_failure(c, e),
        }
    }
}

fn invalid_id<C: Context>(c: &mut C) {
    bad_request(c, INVALID_ID);
}

fn bad_request<C: Context>(c: &mut C, message: impl Into<String>) {
    let message = message.into();
    tracing::warn!(message = %message, "Rejected todo request");
    c.bad_request(message);
}

fn storage_failure<C: Context>(c: &mut C, err: RepositoryError) {
    if err.is_not_found() {
        tracing::debug!(error = %err, "Todo not found");
        c.not_found(err.to_string());
    } else {
        tracing::error!(error = %err, "Todo storage failure");
        c.internal_server(err.to_string());
    }
}
