//! Axum adapter for [`Context`].

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::{bind_json, BindError, Context, Reply};

/// Request context backed by an axum request.
///
/// Extraction never fails on malformed input: path parameters are captured as
/// raw strings and the body as raw bytes, so the handler decides how to report
/// a bad id or a bad payload.
#[derive(Debug, Default)]
pub struct HttpContext {
    params: HashMap<String, String>,
    body: Bytes,
    reply: Option<Reply>,
}

impl<S> FromRequest<S> for HttpContext
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without parameters reject `Path`, which is fine here.
        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let body = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|rejection| {
                tracing::warn!(error = %rejection.body_text(), "Failed to read request body");
                Reply::failure(rejection.status(), rejection.body_text()).into_response()
            })?;

        Ok(Self {
            params,
            body,
            reply: None,
        })
    }
}

impl Context for HttpContext {
    fn param(&self, key: &str) -> &str {
        self.params.get(key).map(String::as_str).unwrap_or_default()
    }

    fn bind<T: DeserializeOwned>(&self) -> Result<T, BindError> {
        bind_json(&self.body)
    }

    fn respond(&mut self, reply: Reply) {
        if self.reply.is_some() {
            tracing::warn!(status = %reply.status, "Response already written, replacing it");
        }
        self.reply = Some(reply);
    }
}

impl IntoResponse for HttpContext {
    fn into_response(self) -> Response {
        self.reply
            .unwrap_or_else(|| {
                tracing::error!("Handler finished without writing a response");
                Reply::failure(StatusCode::INTERNAL_SERVER_ERROR, "no response written")
            })
            .into_response()
    }
}
