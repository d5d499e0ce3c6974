//! Request/response plumbing between the typed services and whatever answers
//! them: a real backend over HTTP or the in-process mock router.

use std::fmt::Display;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::dto::api::ApiResponse;

pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod retry;

pub use http::HttpTransport;
pub use retry::RetryPolicy;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Reads may be repeated without side effects; mutations may not.
    pub fn is_idempotent_read(self) -> bool {
        matches!(self, Method::Get)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(format!("unsupported method {other}")),
        }
    }
}

/// Outbound request, relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path such as `/customers/1`; may carry a query string.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Raw `Authorization` header value.
    pub authorization: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authorization: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Path without a trailing query string.
    pub fn route_path(&self) -> &str {
        self.path.split('?').next().unwrap_or_default()
    }

    /// Value of query parameter `name`, including parameters embedded in `path`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .or_else(|| {
                self.path
                    .split_once('?')
                    .and_then(|(_, query)| {
                        query.split('&').find_map(|pair| {
                            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                            (key == name).then_some(value)
                        })
                    })
            })
    }
}

/// Answer to an [`ApiRequest`]: HTTP-like status plus JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    /// Serializes an envelope, degrading to a 500 failure envelope if the
    /// payload cannot be represented as JSON.
    pub fn envelope<T: Serialize>(status: u16, envelope: &ApiResponse<T>) -> Self {
        match serde_json::to_value(envelope) {
            Ok(body) => Self { status, body },
            Err(err) => {
                log::error!("Failed to serialize response envelope: {err}");
                Self {
                    status: STATUS_INTERNAL_SERVER_ERROR,
                    body: serde_json::json!({
                        "success": false,
                        "error": "Internal error",
                        "message": "Response could not be serialized",
                    }),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body looks like an [`ApiResponse`].
    pub fn carries_envelope(&self) -> bool {
        self.body
            .get("success")
            .is_some_and(|success| success.is_boolean())
    }
}

/// Transport-shaped failures: the request never produced an envelope.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Raised on the client side: connection, timeout or decoding problems.
    #[error("Client error: {0}")]
    Client(String),
    /// Raised by the server with a non-envelope error response.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

impl TransportError {
    /// Whether a retry may succeed: anything client side, or a 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Client(_) => true,
            TransportError::Server { status, .. } => *status >= 500,
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError>;
}

#[async_trait]
impl<T> Transport for std::sync::Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_are_read_from_both_sources() {
        let request = ApiRequest::get("/projects?customerId=3")
            .query(vec![("page".to_string(), "2".to_string())]);
        assert_eq!(request.route_path(), "/projects");
        assert_eq!(request.query_param("customerId"), Some("3"));
        assert_eq!(request.query_param("page"), Some("2"));
        assert_eq!(request.query_param("search"), None);
    }

    #[test]
    fn transport_errors_name_their_origin() {
        let client = TransportError::Client("connection refused".to_string());
        let server = TransportError::Server {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(client.to_string(), "Client error: connection refused");
        assert_eq!(server.to_string(), "Server error 502: Bad Gateway");
    }

    #[test]
    fn envelope_detection_requires_boolean_success() {
        let reply = ApiReply {
            status: 404,
            body: serde_json::json!({"success": false, "error": "Not found"}),
        };
        assert!(reply.carries_envelope());
        let html = ApiReply {
            status: 502,
            body: Value::String("<html>".to_string()),
        };
        assert!(!html.carries_envelope());
    }

    #[test]
    fn method_parsing_is_case_insensitive() {
        assert_eq!("delete".parse::<Method>(), Ok(Method::Delete));
        assert!("TRACE".parse::<Method>().is_err());
        assert!(Method::Get.is_idempotent_read());
        assert!(!Method::Post.is_idempotent_read());
    }
}
