//! superpy-core
//!
//! Inventory business logic: buying, selling, listing, revenue and profit.
//! Depends on superpy-domain. No CLI, no terminal I/O, no direct file access;
//! persistence and the simulated date are reached through the `LedgerStorage`
//! and `Clock` traits.

pub mod error;
pub mod inventory_service;
pub mod storage;
pub mod summary_service;
pub mod time;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use inventory_service::*;
pub use storage::LedgerStorage;
pub use summary_service::*;
pub use time::{Clock, FixedClock};
