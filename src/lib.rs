//! Buddy-system memory pool simulator
//!
//! # Purpose
//! Simulates a manager for a fixed pool of `N` equal-sized blocks (`N` a
//! power of two) using the buddy-system strategy. Callers reserve
//! contiguous block ranges under a name, release them by name, and take
//! read-only snapshots of the free lists and the reservation table.
//!
//! # Integration Points
//! - Depends on: nothing beyond `log` and `thiserror`
//! - Provides to: any request/response front end (CLI loop, test driver)
//! - The engine is a plain owned value; drivers call it synchronously
//!
//! # Architecture
//! - Segregated free lists, one FIFO queue per power-of-two order
//! - Name table mapping reservation names to their block ranges
//! - Reserve splits the first large-enough free block down to size;
//!   release merges freed blocks with their buddies all the way up
//! - Every operation validates before mutating, so a failed call leaves
//!   both tables untouched
//!
//! # Testing Strategy
//! - Unit tests: per-module, next to the code they cover
//! - Integration tests: end-to-end reserve/release scenarios and the
//!   coverage/power-of-two invariants, under `tests/`
//! - Benchmarks: reserve/release churn latency via criterion

use thiserror::Error;

mod engine;
mod free_list;
mod inspect;
mod names;
mod order;
mod range;

pub use engine::BuddyEngine;
pub use inspect::Snapshot;
pub use order::{blocks_of, order_for};
pub use range::BlockRange;

/// Error types for pool construction and reservation operations
#[derive(Debug, Error)]
pub enum BuddyError {
    #[error("Pool size must be a positive power of two (got {size})")]
    InvalidPoolSize { size: usize },

    #[error("Block count must be at least 1 (got {count})")]
    InvalidCount { count: usize },

    #[error("Name already has a reservation: {name}")]
    NameAlreadyReserved { name: String },

    #[error("No free range large enough (requested: {requested} blocks)")]
    OutOfMemory { requested: usize },

    #[error("No reservation under name: {name}")]
    UnknownName { name: String },
}

pub type Result<T> = core::result::Result<T, BuddyError>;
