//! Request and response envelopes exchanged with the invoking platform.
//!
//! Both types serialise with the platform's camelCase field names, so a raw
//! invocation event can be decoded straight into a [`HandlerRequest`].

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};

/// Header name carried on every response.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Media type of every response body.
pub const APPLICATION_JSON: &str = "application/json";

/// A single inbound invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path_parameters: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl HandlerRequest {
    /// Creates a request with no path parameters and no body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw JSON body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a path parameter.
    #[must_use]
    pub fn with_path_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Returns the raw body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the named path parameter, if any.
    #[must_use]
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|parameters| parameters.get(name))
            .map(String::as_str)
    }
}

/// Per-invocation metadata supplied by the platform.
///
/// Handlers only use it to tag their log events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    request_id: Option<String>,
}

impl InvocationContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform request identifier.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns the platform request identifier, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Opens the log span for one handler invocation.
    #[must_use]
    pub fn span(&self, operation: &'static str) -> tracing::Span {
        tracing::info_span!("handler", operation, request_id = self.request_id())
    }
}

/// A single outbound response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    status_code: u16,
    headers: BTreeMap<String, String>,
    body: String,
}

impl HandlerResponse {
    /// Creates a JSON response.
    #[must_use]
    pub fn json(status: StatusCode, body: &Value) -> Self {
        Self::encoded(status, body.to_string())
    }

    /// Creates a JSON response from an already encoded body.
    ///
    /// The body is sent verbatim, so object keys keep the order in which they
    /// were serialised.
    #[must_use]
    pub fn encoded(status: StatusCode, body: String) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: BTreeMap::from([(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned())]),
            body,
        }
    }

    /// Creates an `{"error": message}` response.
    #[must_use]
    pub fn error(status: StatusCode, message: &str) -> Self {
        Self::json(status, &json!({ "error": message }))
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns all response headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns the encoded body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when the body is not valid JSON.
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
