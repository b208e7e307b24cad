use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform wrapper for every response body.
///
/// On success `message` is empty; on failure `data` is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            message: String::new(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Value::Null,
        }
    }
}

/// A status code paired with the envelope to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl Reply {
    /// Builds a success reply, falling back to a 500 failure when `payload`
    /// cannot be represented as JSON.
    pub fn success<T: Serialize>(status: StatusCode, payload: T) -> Self {
        match serde_json::to_value(payload) {
            Ok(data) => Self {
                status,
                envelope: Envelope::success(data),
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response payload");
                Self::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to serialize response: {e}"),
                )
            }
        }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: Envelope::failure(message),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
