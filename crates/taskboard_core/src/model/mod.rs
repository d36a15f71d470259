//! Domain model for the task/user collections.
//!
//! # Responsibility
//! - Define the canonical entity records owned by the stores.
//! - Keep entity-level mutation helpers next to the data they mutate.
//!
//! # Invariants
//! - Every entity carries a store-assigned integer id, immutable after
//!   creation.
//! - Timestamps are unix epoch milliseconds.

pub mod task;
pub mod user;

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall clock as unix epoch milliseconds.
///
/// Clamps to zero for clocks set before the epoch instead of failing;
/// creation timestamps are display metadata, not ordering keys.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
