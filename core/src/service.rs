//! Typed facade over the user API: build, execute, parse.
//!
//! # Design
//! `UserService` pairs a [`UserClient`] with an injected [`Transport`] and
//! runs the full round-trip for each operation. There is deliberately no
//! global service instance — callers construct one and hand it to whoever
//! needs it, so tests get isolated instances with scripted transports.

use crate::client::UserClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{User, UserDraft};

/// Executes user CRUD operations against `{base_url}/users[...]`.
///
/// All correctness of uniqueness and existence is delegated to the server;
/// the service performs no client-side validation.
#[derive(Debug)]
pub struct UserService<T> {
    client: UserClient,
    transport: T,
}

impl<T: Transport> UserService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: UserClient::new(base_url),
            transport,
        }
    }

    /// Fetch every user, in the order the server lists them.
    pub fn get_all(&self) -> Result<Vec<User>, ApiError> {
        let request = self.client.build_list_users();
        let response = self.transport.execute(request)?;
        self.client.parse_list_users(response)
    }

    /// Fetch a single user. Fails with `ApiError::NotFound` if the id is
    /// unknown to the server.
    pub fn get_by_id(&self, id: u64) -> Result<User, ApiError> {
        let request = self.client.build_get_user(id);
        let response = self.transport.execute(request)?;
        self.client.parse_get_user(response)
    }

    /// Create a user from a draft; the server assigns the id.
    pub fn create(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let request = self.client.build_create_user(draft)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_user(response)
    }

    /// Replace the name and email of an existing user.
    pub fn update(&self, id: u64, draft: &UserDraft) -> Result<User, ApiError> {
        let request = self.client.build_update_user(id, draft)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_user(response)
    }

    /// Delete a user. Fails if the server rejects the request.
    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        let request = self.client.build_delete_user(id);
        let response = self.transport.execute(request)?;
        self.client.parse_delete_user(response)
    }
}
