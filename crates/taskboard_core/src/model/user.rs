//! User entity and email validation.
//!
//! # Responsibility
//! - Define the user record and its partial-update semantics.
//! - Own the single email pattern shared by store and controller checks.
//!
//! # Invariants
//! - `id` is assigned by the owning store and never changes afterwards.
//! - `update_info` applies each field independently and only when the
//!   provided value is non-blank after trimming.

use super::now_epoch_ms;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier, monotonic per store.
pub type UserId = u64;

/// Pattern: one or more non-space/non-@ chars, `@`, domain, `.`, tld.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Returns whether `email` matches the accepted `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// One member record owned by a `UserStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable id, unique within the owning store.
    pub id: UserId,
    /// Display name. May be blank; `display_name` falls back then.
    pub name: String,
    /// Contact address. Gated by `is_valid_email` at store insertion.
    pub email: String,
    /// Free-text role category, matched exactly by role queries.
    pub role: String,
    /// Short glyph shown next to the name.
    pub avatar: String,
    /// Creation time in unix epoch milliseconds.
    pub created_at_ms: i64,
}

impl User {
    /// Creates a user record. Called by the store factory only; the email
    /// gate runs in the store, not here.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            avatar: avatar.into(),
            created_at_ms: now_epoch_ms(),
        }
    }

    /// Applies a partial update. Each of name/email/role is taken only when
    /// the given value is non-blank after trimming; blank inputs leave the
    /// current value untouched. Accepted values are stored trimmed.
    pub fn update_info(&mut self, name: &str, email: &str, role: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.name = name.to_string();
        }
        let email = email.trim();
        if !email.is_empty() {
            self.email = email.to_string();
        }
        let role = role.trim();
        if !role.is_empty() {
            self.role = role.to_string();
        }
    }

    /// Returns the name, or `"Anonymous"` when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }

    /// Returns whether the stored email matches the accepted shape.
    pub fn has_valid_email(&self) -> bool {
        is_valid_email(&self.email)
    }
}
