//! Controllers mediating between presentation callers and stores.
//!
//! # Responsibility
//! - Validate raw input before it reaches a store.
//! - Own the subscriber registry and fire change notifications.
//!
//! # Invariants
//! - Each controller owns exactly one store and never touches its
//!   collection except through store methods.
//! - Listeners run synchronously, in registration order, after every
//!   successful mutation.

pub mod task_controller;
pub mod user_controller;

/// Zero-argument change callback registered via `subscribe`.
pub type Listener = Box<dyn FnMut()>;

/// Host-environment yes/no confirmation boundary.
///
/// Destructive bulk operations ask through this trait before acting, so the
/// embedding environment decides how (and whether) to prompt.
pub trait ConfirmPrompt {
    /// Returns `true` when the user confirmed `message`.
    fn confirm(&self, message: &str) -> bool;
}

/// Fixed-answer prompt for non-interactive hosts and tests.
pub struct AutoConfirm(pub bool);

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
