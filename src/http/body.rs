//! JSON request body extraction.
//!
//! Bodies are parsed only when the request declares `application/json`.
//! Other content types, and a zero-length body, read as an empty object so
//! handlers report missing fields instead of a parse failure.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Parsed request body, always an object or an array.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl JsonBody {
    pub fn empty() -> Self {
        JsonBody(Value::Object(Map::new()))
    }

    /// Parse raw bytes. Top-level scalars and whitespace-only bodies are
    /// rejected the same way as syntax errors.
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.is_empty() {
            return Ok(Self::empty());
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::MalformedBody("body holds only whitespace".into()));
        }
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        match value {
            Value::Object(_) | Value::Array(_) => Ok(JsonBody(value)),
            other => Err(ApiError::MalformedBody(format!(
                "top-level value must be an object or array, got {}",
                other
            ))),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The field as a string, if it is a non-empty string.
    pub fn non_empty_str(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal(format!("failed to read request body: {}", e)))?;

        if !is_json {
            return Ok(Self::empty());
        }
        Self::parse(&bytes)
    }
}

fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json"
}
