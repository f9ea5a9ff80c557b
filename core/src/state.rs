//! Client-side state container for the user management page.
//!
//! # Design
//! `CrudContainer` owns everything the page shows: the user list, the
//! loading flag, modal visibility, the record being edited, and the form
//! draft. It orchestrates calls into an injected [`UserService`] and
//! re-fetches the full list after every successful mutation — the
//! displayed list is always the result of the last fetch, never a
//! speculative local patch.
//!
//! Every service failure is caught here, logged, and swallowed: the
//! loading flag clears and the page simply does not update. Service calls
//! are synchronous, so operations cannot overlap and there is no stale
//! in-flight response to guard against.
//!
//! One behavior is deliberately stricter than a typical optimistic UI:
//! the modal closes only after the server acknowledges the save. A failed
//! save leaves the modal open with the draft intact.

use tracing::error;

use crate::http::Transport;
use crate::service::UserService;
use crate::types::{User, UserDraft};

/// A form field the modal can edit. The id is never a form field — it is
/// server-assigned and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
}

/// Transient draft of the modal's field values. Exists only while the
/// modal is open; cleared on cancel, successful submit, or close.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
}

impl FormDraft {
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

impl From<&FormDraft> for UserDraft {
    fn from(form: &FormDraft) -> Self {
        UserDraft {
            name: form.name.clone(),
            email: form.email.clone(),
        }
    }
}

/// Blocking yes/no confirmation asked before every delete. The host wires
/// this to a real dialog or prompt; tests use canned answers.
pub trait ConfirmDelete {
    fn confirm_delete(&self, id: u64) -> bool;
}

/// State machine behind the management page.
///
/// The service is injected at construction — there is no global instance,
/// so tests get fully isolated containers.
#[derive(Debug)]
pub struct CrudContainer<T, C> {
    service: UserService<T>,
    confirm: C,
    users: Vec<User>,
    loading: bool,
    show_modal: bool,
    editing_user: Option<User>,
    form: FormDraft,
}

impl<T: Transport, C: ConfirmDelete> CrudContainer<T, C> {
    pub fn new(service: UserService<T>, confirm: C) -> Self {
        Self {
            service,
            confirm,
            users: Vec::new(),
            loading: false,
            show_modal: false,
            editing_user: None,
            form: FormDraft::default(),
        }
    }

    /// Fetch the list from the server. Called on mount and after every
    /// successful mutation. On failure the previous list stays in place.
    pub fn refresh(&mut self) {
        self.loading = true;
        match self.service.get_all() {
            Ok(users) => self.users = users,
            Err(err) => error!("error fetching users: {err}"),
        }
        self.loading = false;
    }

    /// Open the modal in create mode with a blank draft.
    pub fn open_create_modal(&mut self) {
        self.editing_user = None;
        self.form = FormDraft::default();
        self.show_modal = true;
    }

    /// Open the modal in edit mode, seeding the draft from the record's
    /// name and email. The id stays out of the draft.
    pub fn open_edit_modal(&mut self, user: User) {
        self.form = FormDraft {
            name: user.name.clone(),
            email: user.email.clone(),
        };
        self.editing_user = Some(user);
        self.show_modal = true;
    }

    /// Fold one field edit into the draft.
    pub fn update_form(&mut self, field: FormField, value: &str) {
        self.form.set(field, value);
    }

    /// Save the draft: update when a record is being edited, create
    /// otherwise. The modal closes only once the server has acknowledged
    /// the save; on failure it stays open with the draft preserved.
    pub fn submit(&mut self) {
        if !self.show_modal {
            return;
        }
        self.loading = true;
        let draft = UserDraft::from(&self.form);
        let result = match &self.editing_user {
            Some(user) => self.service.update(user.id, &draft),
            None => self.service.create(&draft),
        };
        match result {
            Ok(_) => {
                self.show_modal = false;
                self.editing_user = None;
                self.form = FormDraft::default();
                self.loading = false;
                self.refresh();
            }
            Err(err) => {
                error!("error saving user: {err}");
                self.loading = false;
            }
        }
    }

    /// Delete a record, gated on the confirmation capability. A declined
    /// confirmation changes nothing and calls nothing. After a confirmed
    /// delete the list is re-fetched even if the delete call itself
    /// failed, so the page stays consistent with the server.
    pub fn delete(&mut self, id: u64) {
        if !self.confirm.confirm_delete(id) {
            return;
        }
        self.loading = true;
        if let Err(err) = self.service.delete(id) {
            error!("error deleting user: {err}");
        }
        self.loading = false;
        self.refresh();
    }

    /// Hide the modal and discard the draft, whatever state it was in.
    pub fn close_modal(&mut self) {
        self.show_modal = false;
        self.editing_user = None;
        self.form = FormDraft::default();
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn modal_open(&self) -> bool {
        self.show_modal
    }

    pub fn editing_user(&self) -> Option<&User> {
        self.editing_user.as_ref()
    }

    pub fn form(&self) -> &FormDraft {
        &self.form
    }
}
