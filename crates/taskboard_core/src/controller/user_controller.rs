//! User controller.
//!
//! # Responsibility
//! - Validate user input and delegate mutations to the owned `UserStore`.
//! - Provide role-bucketed statistics for member list views.
//!
//! # Invariants
//! - A missing form field short-circuits before the store is called.
//! - The store remains the authority on email validity; the controller's
//!   `validate_email` exists for caller-side pre-checks only.

use crate::controller::Listener;
use crate::model::user::{is_valid_email, User, UserId};
use crate::store::user_store::UserStore;
use log::info;

/// Counts over the fixed role buckets shown by member views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub developers: usize,
    pub designers: usize,
    pub managers: usize,
}

/// Mediates between presentation callers and one `UserStore`.
pub struct UserController {
    store: UserStore,
    listeners: Vec<Listener>,
}

impl UserController {
    /// Creates a controller owning `store`.
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            listeners: Vec::new(),
        }
    }

    /// Registers a change listener. Listeners fire synchronously, in
    /// registration order, after every successful mutation.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify_listeners(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    /// Adds a user from raw form input. Returns `None` when any field is
    /// empty or when the store rejects the email; notifies only on success.
    pub fn handle_add_user(
        &mut self,
        name: &str,
        email: &str,
        role: &str,
        avatar: &str,
    ) -> Option<User> {
        if name.is_empty() || email.is_empty() || role.is_empty() || avatar.is_empty() {
            info!("event=user_add module=user_controller status=rejected reason=missing_field");
            return None;
        }

        let user = self.store.add_user(name, email, role, avatar)?;
        self.notify_listeners();
        Some(user)
    }

    /// Deletes a user by id. Notifies regardless of whether a removal
    /// occurred, matching the task delete contract.
    pub fn handle_delete_user(&mut self, id: UserId) {
        self.store.remove_user(id);
        self.notify_listeners();
    }

    /// Applies a partial update to a user. Absent ids are a silent no-op
    /// with no notification.
    pub fn handle_update_user(
        &mut self,
        id: UserId,
        name: &str,
        email: &str,
        role: &str,
    ) -> Option<User> {
        let user = self.store.update_user(id, name, email, role)?;
        self.notify_listeners();
        Some(user)
    }

    /// Returns a copy of the full collection in insertion order.
    pub fn get_all_users(&self) -> Vec<User> {
        self.store.get_all_users()
    }

    /// Returns the user with `id`, if present.
    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.store.get_user(id).cloned()
    }

    /// Returns users whose role matches exactly, in insertion order.
    pub fn get_users_by_role(&self, role: &str) -> Vec<User> {
        self.store.get_users_by_role(role)
    }

    /// Returns counts for the fixed role buckets.
    pub fn get_user_stats(&self) -> UserStats {
        UserStats {
            total: self.store.total_count(),
            developers: self.store.count_by_role("Developer"),
            designers: self.store.count_by_role("Designer"),
            managers: self.store.count_by_role("Manager"),
        }
    }

    /// Returns the distinct roles present, in first-seen order.
    pub fn get_available_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = Vec::new();
        for user in self.store.get_all_users() {
            if !roles.contains(&user.role) {
                roles.push(user.role);
            }
        }
        roles
    }

    /// Caller-side email pre-check using the same pattern as the store gate.
    pub fn validate_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
