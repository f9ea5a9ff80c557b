//! Domain DTOs for the user API.
//!
//! # Design
//! These types mirror the remote API's schema but are defined
//! independently of the mock-server crate; integration tests catch schema
//! drift between the two. The server assigns integer ids and never lets
//! the client change them, so `User` carries the id and the write payload
//! does not.

use serde::{Deserialize, Serialize};

/// A single user record returned by the API.
///
/// The client never constructs one of these from scratch — every `User` it
/// holds came out of a server response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Write payload for creating or updating a user.
///
/// Create and update carry the same `{name, email}` shape on the wire; on
/// update the id travels in the resource path, never in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}
