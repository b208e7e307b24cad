//! In-memory [`Context`] that records what a handler wrote.

use std::collections::HashMap;

use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{bind_json, BindError, Context, Reply};

#[derive(Debug, Default)]
pub struct RecordingContext {
    params: HashMap<String, String>,
    body: String,
    replies: Vec<Reply>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_json(self, value: Value) -> Self {
        self.with_body(value.to_string())
    }

    /// Number of responses written so far.
    pub fn writes(&self) -> usize {
        self.replies.len()
    }

    /// The last response written.
    pub fn reply(&self) -> Option<&Reply> {
        self.replies.last()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.reply().map(|r| r.status)
    }

    pub fn data(&self) -> Option<&Value> {
        self.reply().map(|r| &r.envelope.data)
    }

    pub fn message(&self) -> Option<&str> {
        self.reply().map(|r| r.envelope.message.as_str())
    }

    /// Deserializes the recorded envelope data.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.data()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }
}

impl Context for RecordingContext {
    fn param(&self, key: &str) -> &str {
        self.params.get(key).map(String::as_str).unwrap_or_default()
    }

    fn bind<T: DeserializeOwned>(&self) -> Result<T, BindError> {
        bind_json(self.body.as_bytes())
    }

    fn respond(&mut self, reply: Reply) {
        self.replies.push(reply);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_success() {
        let mut ctx = RecordingContext::new();

        ctx.created(serde_json::json!({"id": 1}));

        assert_eq!(ctx.writes(), 1);
        assert_eq!(ctx.status(), Some(StatusCode::CREATED));
        assert_eq!(ctx.data(), Some(&serde_json::json!({"id": 1})));
        assert_eq!(ctx.message(), Some(""));
    }

    #[test]
    fn test_records_failure() {
        let mut ctx = RecordingContext::new();

        ctx.bad_request("invalid id");

        assert_eq!(ctx.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(ctx.data(), Some(&Value::Null));
        assert_eq!(ctx.message(), Some("invalid id"));
    }

    #[test]
    fn test_nothing_recorded() {
        let ctx = RecordingContext::new().with_param("id", "1");

        assert_eq!(ctx.param("id"), "1");
        assert_eq!(ctx.param("other"), "");
        assert_eq!(ctx.writes(), 0);
        assert_eq!(ctx.status(), None);
    }
}
