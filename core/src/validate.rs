//! Input validators for the form host.
//!
//! The core container performs no validation — uniqueness and existence
//! belong to the server. These helpers let a host emulate what a browser
//! form would enforce (`required` fields, an email-shaped value) before
//! dispatching a submit.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Loose email shape check: something, an `@`, a dot somewhere after it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True when the string contains at least one non-whitespace character.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
