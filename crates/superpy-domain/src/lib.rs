//! superpy-domain
//!
//! Pure inventory models (Purchase, Sale, report rows, revenue series).
//! No I/O, no CLI, no storage. Only data types and small helpers.

pub mod common;
pub mod purchase;
pub mod report;
pub mod sale;

pub use common::*;
pub use purchase::*;
pub use report::*;
pub use sale::*;
