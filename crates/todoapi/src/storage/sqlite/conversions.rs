//! SQLite row conversion functions.

use rusqlite::Row;
use todoapi_core::todo::Todo;

/// Convert a SQLite row to a Todo.
///
/// Expected columns: id, title, description, done
pub fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        done: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(sql: &str) -> rusqlite::Result<Todo> {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.query_row(sql, [], row_to_todo)
    }

    #[test]
    fn test_row_to_todo() {
        let todo = query("SELECT 4, 'Water plants', 'balcony', 1").unwrap();
        assert_eq!(
            todo,
            Todo::new("Water plants")
                .with_description("balcony")
                .with_done(true)
                .with_id(4)
        );
    }

    #[test]
    fn test_row_to_todo_done_false() {
        let todo = query("SELECT 1, 't', '', 0").unwrap();
        assert!(!todo.done);
    }

    #[test]
    fn test_row_to_todo_rejects_null_title() {
        assert!(query("SELECT 1, NULL, '', 0").is_err());
    }
}
