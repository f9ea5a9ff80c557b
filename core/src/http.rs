//! HTTP wrapper types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values; actually moving bytes is the
//! job of whatever implements [`Transport`] — a real HTTP agent in the
//! host binary, a scripted fake in tests. This keeps every layer above the
//! trait deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can be cloned
//! into test recordings without lifetime concerns.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `UserClient::build_*` methods and handed to a [`Transport`]
/// for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`], then passed to `UserClient::parse_*`
/// methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The generic HTTP transport capability consumed by the service layer.
///
/// Implementations execute one request and return whatever the server
/// said, including non-2xx statuses — status interpretation belongs to the
/// parse step, not the transport. Only a failure to reach the server at
/// all is an `Err` (`ApiError::Transport`). No retries, no timeouts, no
/// auth headers.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
