// Response envelope for runtime-generated failures, plus the logging middleware
// that applies it. Successful responses are passed through byte-for-byte.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE}, HeaderValue, Method, Request, Response,
        response::Parts, StatusCode, Extensions
    },
    Json,
    middleware::Next,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{error, info, warn};
use std::{convert::Infallible, time::Instant};
use serde_json::{json, Value};
use serde::{Serialize, Deserialize};
use crate::utils::utils::to_two_space_indented_json;

/// Standard JSON body for non-success responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "NOT_FOUND")
    pub code: u16,               // HTTP status code
    pub data: Value,             // Response payload
    pub messages: Vec<String>,   // Informational messages
    pub date: String,            // ISO timestamp
}

/// Convenience struct for building enveloped responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: Value::Null,
            messages: Vec::new(),
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(json!({
            "data": self.data,
            "messages": self.messages
        })).into_response();

        *response.status_mut() = self.status_code;

        // Store HandlerResponse in extensions for middleware processing
        response.extensions_mut().insert(self);
        response
    }
}

/// "Not Found" -> "NOT_FOUND"
fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Extracts response data and messages from HandlerResponse extensions
fn extract_response_components(response: &Response<Body>) -> (Vec<String>, Value) {
    let extensions: &Extensions = response.extensions();

    match extensions.get::<HandlerResponse>() {
        Some(r) => (r.messages.clone(), r.data.clone()),
        None => (Vec::new(), Value::Null),
    }
}

/// Builds the envelope for a status; date is stamped now
pub fn wrap(status: StatusCode, data: Value, messages: Vec<String>) -> ResponseFormat {
    ResponseFormat {
        status: status_label(status),
        code: status.as_u16(),
        data,
        messages,
        date: Utc::now().to_rfc3339(),
    }
}

/// Logs the formatted response with proper JSON indentation
fn log_formatted_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => info!("\nFinal response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Builds the final response with JSON content type
fn build_final_response(mut parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(wrapped).unwrap_or_else(|err| {
        error!("Failed to serialize wrapped response: {err}");
        b"{}".to_vec()
    });

    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Response::from_parts(parts, Body::from(json_body))
}

/// Middleware that logs every response and wraps failures in `ResponseFormat`
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;
    let status: StatusCode = response.status();
    let elapsed_ms: u128 = start.elapsed().as_millis();

    if !status.is_client_error() && !status.is_server_error() {
        info!("{method} {path} -> {} in {elapsed_ms} ms", status.as_u16());
        return Ok(response);
    }

    warn!("{method} {path} -> {} in {elapsed_ms} ms", status.as_u16());

    let (messages, data) = extract_response_components(&response);
    let (parts, _) = response.into_parts();

    let wrapped: ResponseFormat = wrap(parts.status, data, messages);

    log_formatted_response(&wrapped);

    Ok(build_final_response(parts, &wrapped))
}
