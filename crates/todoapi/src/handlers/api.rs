//! Axum route functions for the todo resource.
//!
//! Each route builds an [`HttpContext`], hands it to [`TodoHandler`] and
//! returns it as the response.
//!
//! [`TodoHandler`]: super::TodoHandler

use axum::extract::State;

use crate::{context::HttpContext, state::AppState};

/// List all todos (GET /todos).
pub async fn list_todos(State(state): State<AppState>, mut ctx: HttpContext) -> HttpContext {
    state.todos.list(&mut ctx).await;
    ctx
}

/// Get a single todo by ID (GET /todos/{id}).
pub async fn get_todo(State(state): State<AppState>, mut ctx: HttpContext) -> HttpContext {
    state.todos.get(&mut ctx).await;
    ctx
}

/// Create a new todo (POST /todos).
pub async fn create_todo(State(state): State<AppState>, mut ctx: HttpContext) -> HttpContext {
    state.todos.create(&mut ctx).await;
    ctx
}

/// Replace a todo by ID (PUT /todos/{id}).
pub async fn update_todo(State(state): State<AppState>, mut ctx: HttpContext) -> HttpContext {
    state.todos.update(&mut ctx).await;
    ctx
}

/// Delete a todo by ID (DELETE /todos/{id}).
pub async fn delete_todo(State(state): State<AppState>, mut ctx: HttpContext) -> HttpContext {
    state.todos.delete(&mut ctx).await;
    ctx
}
