//! Flat-file persistence for the ledger.

pub use amount::parse_file_amount;
pub use error::{Result, StorageError};
pub use flat_file::{FlatFile, decode, encode};

mod amount;
mod error;
mod flat_file;
