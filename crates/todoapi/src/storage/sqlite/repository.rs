//! SQLite repository implementation.
//!
//! Implements [`TodoRepository`] from `todoapi_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use todoapi_core::storage::{RepositoryError, Result, TodoRepository};
use todoapi_core::todo::Todo;

use super::conversions::row_to_todo;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;
use crate::config::Config;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens the database named by the configured connection string.
    ///
    /// See [`Config::sqlite_path`] for the accepted forms.
    pub async fn from_config(config: &Config) -> Result<Self> {
        match config.sqlite_path() {
            Some(path) => Self::new(path).await,
            None => Self::new_in_memory().await,
        }
    }

    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init(conn).await
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init(conn).await
    }

    /// Creates the schema and verifies the connection answers queries.
    async fn init(conn: Connection) -> Result<Self> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)?;

        let repo = Self { conn };
        repo.ping().await?;

        Ok(repo)
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_TODOS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_todo(&self, id: i64) -> Result<Todo> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_TODO_BY_ID).map_err(wrap_err)?;
                let todo = stmt.query_row([id], row_to_todo).map_err(wrap_err)?;
                Ok(todo)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn create_todo(&self, todo: &Todo) -> Result<i64> {
        let title = todo.title.clone();
        let description = todo.description.clone();
        let done = todo.done;

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_TODO,
                    rusqlite::params![title, description, done],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_todo(&self, todo: &Todo) -> Result<()> {
        let id = todo.id;
        let title = todo.title.clone();
        let description = todo.description.clone();
        let done = todo.done;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_TODO,
                        rusqlite::params![id, title, description, done],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_TODO, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| match map_tokio_rusqlite_error(e) {
                RepositoryError::QueryFailed(msg) => RepositoryError::ConnectionFailed(msg),
                other => other,
            })
    }
}
