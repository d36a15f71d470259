//! In-memory stores and their snapshot persistence boundary.
//!
//! # Responsibility
//! - Own the entity collections; stores are the sole mutators (controllers
//!   go through store methods, never through the collections directly).
//! - Keep snapshot wire details behind the `SnapshotStore` trait.
//!
//! # Invariants
//! - Ids are unique per store and assigned as `max existing + 1`.
//! - Insertion order is preserved and significant for display.

pub mod snapshot;
pub mod task_store;
pub mod user_store;
