//! The contract between the store and whatever keeps records between runs.

use crate::{Record, ResultEngine};

/// Loads the records at startup and stores the snapshot at shutdown.
///
/// Failures are reported as [`EngineError::Persistence`](crate::EngineError::Persistence).
pub trait Persistence {
    fn load(&self) -> ResultEngine<Vec<Record>>;

    fn store(&self, records: &[Record]) -> ResultEngine<()>;
}
