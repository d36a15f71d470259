//! User collection store.
//!
//! # Responsibility
//! - Own the ordered user collection, seeded with fixture members.
//! - Gate insertion on email validity; assign user ids.
//!
//! # Invariants
//! - Ids are unique; the next id is `max existing + 1`, or 1 when empty.
//! - Every stored user passed the email gate at insertion time.
//! - In-memory only; tasks persist, users deliberately do not.

use crate::model::user::{User, UserId};
use log::info;

/// Ordered user collection, in-memory only.
pub struct UserStore {
    users: Vec<User>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Creates a store seeded with the fixture member set.
    pub fn new() -> Self {
        Self {
            users: default_users(),
        }
    }

    /// Creates a user with a fresh id and appends it, or returns `None`
    /// without inserting when the email fails the pattern gate.
    pub fn add_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Option<User> {
        let user = User::new(self.next_id(), name, email, role, avatar);
        if !user.has_valid_email() {
            info!(
                "event=user_add module=user_store status=rejected reason=invalid_email id={}",
                user.id
            );
            return None;
        }
        info!("event=user_add module=user_store status=ok id={}", user.id);
        self.users.push(user.clone());
        Some(user)
    }

    /// Removes the user with `id` if present. Absent ids are a no-op.
    pub fn remove_user(&mut self, id: UserId) {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        if self.users.len() != before {
            info!("event=user_remove module=user_store status=ok id={id}");
        }
    }

    /// Returns the user with `id`, if present.
    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Applies a partial update to the user with `id` and returns a copy of
    /// the updated record. Blank fields leave current values untouched.
    pub fn update_user(
        &mut self,
        id: UserId,
        name: &str,
        email: &str,
        role: &str,
    ) -> Option<User> {
        let user = self.users.iter_mut().find(|user| user.id == id)?;
        user.update_info(name, email, role);
        info!("event=user_update module=user_store status=ok id={id}");
        Some(user.clone())
    }

    /// Returns a defensive copy of the collection in insertion order.
    pub fn get_all_users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Returns users whose role matches `role` exactly, in insertion order.
    pub fn get_users_by_role(&self, role: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| user.role == role)
            .cloned()
            .collect()
    }

    /// Total number of users.
    pub fn total_count(&self) -> usize {
        self.users.len()
    }

    /// Number of users whose role matches `role` exactly.
    pub fn count_by_role(&self, role: &str) -> usize {
        self.users.iter().filter(|user| user.role == role).count()
    }

    /// Empties the collection.
    pub fn clear_all(&mut self) {
        info!(
            "event=user_clear module=user_store status=ok removed={}",
            self.users.len()
        );
        self.users.clear();
    }

    fn next_id(&self) -> UserId {
        self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }
}

fn default_users() -> Vec<User> {
    vec![
        User::new(1, "Alice Johnson", "alice@example.com", "Developer", "A"),
        User::new(2, "Bob Smith", "bob@example.com", "Designer", "B"),
        User::new(3, "Carol White", "carol@example.com", "Manager", "C"),
        User::new(4, "David Brown", "david@example.com", "Developer", "D"),
        User::new(5, "Eve Wilson", "eve@example.com", "Developer", "E"),
    ]
}
