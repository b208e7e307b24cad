use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_bool_or_default, deserialize_required_string, deserialize_string_or_default,
};

/// A single todo item.
///
/// The same shape is used for request bodies and responses. `id` is assigned
/// by storage on create and taken from the path on update, so a value sent in
/// a request body is never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_required_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_bool_or_default")]
    pub done: bool,
}

impl Todo {
    /// Creates a new, not yet persisted todo with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            done: false,
        }
    }

    /// Sets the description for this todo.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks this todo as done or not done.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Sets a specific ID for this todo (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Parses a todo identifier from a path segment.
///
/// Identifiers are base-10 signed 64-bit integers. An optional leading sign is
/// accepted; whitespace is not.
pub fn parse_id(raw: &str) -> Result<i64, ParseIntError> {
    raw.parse::<i64>()
}
