//! Error types for the user API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the record does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `Http` with the
//! raw status code and body for debugging. `Transport` covers the only
//! other failure mode this client knows about: not reaching the server at
//! all.

use std::fmt;

/// Errors returned by the service layer and `UserClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response — network unreachable,
    /// connection refused, and the like.
    Transport(String),

    /// The server returned 404 — the requested user does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::NotFound => write!(f, "user not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
