//! Stateless view-models for the management page.
//!
//! # Design
//! Pure functions from state to plain data, mirroring how the rest of the
//! core emits data and lets the host do the work. Nothing here touches the
//! container or the network; the host renders these values and reports
//! interactions back (edit/delete by row id, field edits one
//! `(field, value)` at a time).

use crate::state::{FormDraft, FormField};
use crate::types::User;

/// One table row with the triggers the host needs: the row's id drives
/// both the edit and the delete callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// The list area: a loading placeholder until the first fetch lands, a
/// table afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Table(Vec<UserRow>),
}

/// One row per user, in list order.
pub fn table_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|user| UserRow {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        })
        .collect()
}

/// The placeholder shows only while a fetch is in flight and there is
/// nothing to display yet; a stale list stays visible during refreshes.
pub fn list_view(users: &[User], loading: bool) -> ListView {
    if loading && users.is_empty() {
        ListView::Loading
    } else {
        ListView::Table(table_rows(users))
    }
}

/// A single form field: label, current value, and whether the host should
/// treat it as required before allowing submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

/// The modal form, fully described: which mode it is in, what the fields
/// hold, and whether submit is currently allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: &'static str,
    pub name: FieldView,
    pub email: FieldView,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

/// Renders nothing when the modal is hidden. Submit is disabled while a
/// request is in flight, and the label switches to "Saving..." so the
/// host can show progress.
pub fn modal_view(
    visible: bool,
    editing_user: Option<&User>,
    form: &FormDraft,
    loading: bool,
) -> Option<ModalView> {
    if !visible {
        return None;
    }
    Some(ModalView {
        title: if editing_user.is_some() {
            "Edit User"
        } else {
            "Create New User"
        },
        name: FieldView {
            field: FormField::Name,
            label: "Name",
            value: form.name.clone(),
            required: true,
        },
        email: FieldView {
            field: FormField::Email,
            label: "Email",
            value: form.email.clone(),
            required: true,
        },
        submit_enabled: !loading,
        submit_label: if loading { "Saving..." } else { "Save" },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> User {
        User {
            id: 7,
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
        }
    }

    #[test]
    fn table_rows_map_one_row_per_user() {
        let users = vec![
            bob(),
            User {
                id: 8,
                name: "Eve".to_string(),
                email: "e@x.com".to_string(),
            },
        ];
        let rows = table_rows(&users);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[1].email, "e@x.com");
    }

    #[test]
    fn list_view_shows_placeholder_only_on_empty_first_load() {
        assert_eq!(list_view(&[], true), ListView::Loading);
        assert_eq!(list_view(&[], false), ListView::Table(Vec::new()));
        // A stale list stays visible while refreshing.
        assert!(matches!(list_view(&[bob()], true), ListView::Table(_)));
    }

    #[test]
    fn modal_view_hidden_renders_nothing() {
        let form = FormDraft::default();
        assert!(modal_view(false, None, &form, false).is_none());
    }

    #[test]
    fn modal_view_create_mode() {
        let form = FormDraft::default();
        let view = modal_view(true, None, &form, false).unwrap();
        assert_eq!(view.title, "Create New User");
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, "Save");
        assert!(view.name.required);
        assert!(view.email.required);
    }

    #[test]
    fn modal_view_edit_mode_carries_draft_values() {
        let user = bob();
        let form = FormDraft {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
        };
        let view = modal_view(true, Some(&user), &form, false).unwrap();
        assert_eq!(view.title, "Edit User");
        assert_eq!(view.name.value, "Bob");
        assert_eq!(view.email.value, "b@x.com");
    }

    #[test]
    fn modal_view_disables_submit_while_loading() {
        let form = FormDraft::default();
        let view = modal_view(true, None, &form, true).unwrap();
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, "Saving...");
    }
}
