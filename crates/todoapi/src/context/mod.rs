//! Per-request transport context.
//!
//! Handlers never touch axum types directly. They read input and write their
//! single response through [`Context`], which keeps the request logic testable
//! against [`RecordingContext`] without an HTTP stack.

mod envelope;
mod http;
#[cfg(test)]
mod recording;

use axum::http::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use envelope::{Envelope, Reply};
pub use http::HttpContext;
#[cfg(test)]
pub use recording::RecordingContext;

/// Errors raised while binding a request body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The body is not valid JSON or does not match the target shape.
    #[error("{0}")]
    Malformed(String),
}

impl From<serde_json::Error> for BindError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Deserializes a JSON request body into `T`.
pub(crate) fn bind_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, BindError> {
    Ok(serde_json::from_slice(body)?)
}

/// Input access and response writing for one inbound request.
pub trait Context: Send {
    /// Returns a path parameter, or `""` when the route has none by that name.
    fn param(&self, key: &str) -> &str;

    /// Deserializes the request body into `T`.
    fn bind<T: DeserializeOwned>(&self) -> Result<T, BindError>;

    /// Records the response for this request.
    fn respond(&mut self, reply: Reply);

    /// 200 with `payload` as envelope data.
    fn ok<T: Serialize>(&mut self, payload: T) {
        self.respond(Reply::success(StatusCode::OK, payload));
    }

    /// 201 with `payload` as envelope data.
    fn created<T: Serialize>(&mut self, payload: T) {
        self.respond(Reply::success(StatusCode::CREATED, payload));
    }

    /// 400 with `message` in a failure envelope.
    fn bad_request(&mut self, message: impl Into<String>) {
        self.respond(Reply::failure(StatusCode::BAD_REQUEST, message));
    }

    /// 404 with `message` in a failure envelope.
    fn not_found(&mut self, message: impl Into<String>) {
        self.respond(Reply::failure(StatusCode::NOT_FOUND, message));
    }

    /// 500 with `message` in a failure envelope.
    fn internal_server(&mut self, message: impl Into<String>) {
        self.respond(Reply::failure(StatusCode::INTERNAL_SERVER_ERROR, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoapi_core::todo::Todo;

    #[test]
    fn test_bind_json_valid() {
        let todo: Todo = bind_json(br#"{"title": "Read a book"}"#).unwrap();
        assert_eq!(todo.title, "Read a book");
    }

    #[test]
    fn test_bind_json_empty_body_is_malformed() {
        let result = bind_json::<Todo>(b"");
        assert!(matches!(result, Err(BindError::Malformed(_))));
    }

    #[test]
    fn test_bind_json_invalid_json_is_malformed() {
        let result = bind_json::<Todo>(b"{not json");
        assert!(matches!(result, Err(BindError::Malformed(_))));
    }

    #[test]
    fn test_bind_json_schema_mismatch_is_malformed() {
        let err = bind_json::<Todo>(br#"{"description": "untitled"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"));
    }
}
