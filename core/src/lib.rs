//! Synchronous client core for a remote user-management API.
//!
//! # Overview
//! Lists, creates, edits, and deletes `User` records against an HTTP/JSON
//! API and drives the client-side state for a management page: a table of
//! users plus a create/edit modal. The whole thing is CRUD glue — render a
//! table, open a modal form, call one of four REST endpoints, refresh the
//! table.
//!
//! # Design
//! - `UserClient` is stateless — it holds only `base_url`. Each operation
//!   is split into `build_*` (produces an `HttpRequest`) and `parse_*`
//!   (consumes an `HttpResponse`), so the I/O boundary stays explicit.
//! - `UserService` pairs the client with an injected [`Transport`] and
//!   executes the round-trip. There is no global service instance; callers
//!   construct one and hand it to the container.
//! - `CrudContainer` owns the page state (user list, loading flag, modal,
//!   form draft) and swallows service failures after logging them — the
//!   page simply does not update.
//! - `view` renders state into plain view-model data; the host decides how
//!   to draw it.

pub mod client;
pub mod error;
pub mod http;
pub mod routes;
pub mod service;
pub mod state;
pub mod types;
pub mod validate;
pub mod view;

pub use client::UserClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use service::UserService;
pub use state::{ConfirmDelete, CrudContainer, FormDraft, FormField};
pub use types::{User, UserDraft};
