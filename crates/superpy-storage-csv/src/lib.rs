//! superpy-storage-csv
//!
//! Flat-file adapters for the inventory ledger: semicolon-delimited purchase
//! and sale tables plus the one-line file holding the simulated date.
//!
//! Files are replaced wholesale through a temporary sibling and a rename, so a
//! reader never observes a half-written table. There is no locking: two
//! processes writing at once still race, and the last rename wins.

pub mod atomic;
pub mod clock;
pub mod csv_storage;

use std::path::PathBuf;

pub use atomic::replace_file;
pub use clock::FileClock;
pub use csv_storage::CsvLedgerStorage;

/// Locations of the three files that make up a ledger on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub purchases: PathBuf,
    pub sales: PathBuf,
    pub clock: PathBuf,
}
