use crate::{
    AggregateIndex, EngineError, HistoryLog, PendingQueue, RankingHeap, Record, ResultEngine,
    UndoRedo,
};

mod mutations;
mod queries;

/// The in-memory ledger.
///
/// Owns the history, the per-category totals, the max-by-amount heap, the
/// undo/redo stacks and the pending queue, and keeps all of them in step:
/// every public method either updates each affected structure or none.
#[derive(Debug, Default)]
pub struct TransactionStore {
    history: HistoryLog,
    totals: AggregateIndex,
    ranking: RankingHeap,
    undo: UndoRedo,
    pending: PendingQueue,
    dirty: bool,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a builder for `TransactionStore`. Help to build the struct.
    pub fn builder() -> TransactionStoreBuilder {
        TransactionStoreBuilder::default()
    }

    /// `true` when the history changed since the last restore or
    /// [`mark_clean`](Self::mark_clean).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call once the current snapshot has been persisted.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

fn normalize_label(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidLabel(
            "description must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// The builder for `TransactionStore`
#[derive(Default)]
pub struct TransactionStoreBuilder {
    records: Vec<Record>,
}

impl TransactionStoreBuilder {
    /// Records loaded from storage, in file order.
    pub fn records(mut self, records: Vec<Record>) -> TransactionStoreBuilder {
        self.records = records;
        self
    }

    /// Construct `TransactionStore`
    pub fn build(self) -> ResultEngine<TransactionStore> {
        let mut store = TransactionStore::new();
        store.restore(self.records)?;
        Ok(store)
    }
}
