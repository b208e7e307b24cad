//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    done INTEGER NOT NULL DEFAULT 0
);
"#;

pub const PING: &str = "SELECT 1";

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, description, done)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_TODOS: &str = r#"
SELECT id, title, description, done
FROM todos
ORDER BY id ASC
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, title, description, done
FROM todos
WHERE id = ?1
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET title = ?2, description = ?3, done = ?4
WHERE id = ?1
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;
