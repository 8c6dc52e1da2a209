//! In-memory transaction store for a single-user budget ledger.
//!
//! [`TransactionStore`] is the only type most callers need. It never touches
//! the terminal or the file system: records come in through
//! [`TransactionStore::restore`] and leave through
//! [`TransactionStore::snapshot`].

pub use aggregate::{AggregateIndex, Report};
pub use error::EngineError;
pub use history::HistoryLog;
pub use money::MoneyCents;
pub use ops::{TransactionStore, TransactionStoreBuilder};
pub use persistence::Persistence;
pub use queue::PendingQueue;
pub use ranking::RankingHeap;
pub use record::{Category, Record, SortKey};
pub use undo::{UndoRedo, Undone};

mod aggregate;
mod error;
mod history;
mod money;
mod ops;
mod persistence;
mod queue;
mod ranking;
mod record;
mod undo;

pub type ResultEngine<T> = Result<T, EngineError>;
