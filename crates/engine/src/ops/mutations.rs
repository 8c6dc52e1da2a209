use crate::{Category, EngineError, MoneyCents, Record, ResultEngine, SortKey, Undone};

use super::{TransactionStore, normalize_label};

impl TransactionStore {
    /// Bulk-load records read from storage.
    ///
    /// Records land in the history, the totals and the ranking heap. They are
    /// not queued for processing and cannot be undone. If the totals would
    /// overflow, nothing is restored.
    pub fn restore(&mut self, records: Vec<Record>) -> ResultEngine<()> {
        let mut totals = self.totals.clone();
        for record in &records {
            totals.add(record.category(), record.amount())?;
        }
        self.totals = totals;

        let count = records.len();
        for record in records {
            self.ranking.push(record.clone());
            self.history.append(record);
        }
        tracing::info!("restored {count} transactions");
        Ok(())
    }

    /// Records a new transaction and returns it.
    ///
    /// The record is appended to the history, added to the totals and the
    /// ranking heap, queued for processing and pushed on the undo stack. Any
    /// redo history is discarded.
    pub fn add(
        &mut self,
        category: Category,
        label: &str,
        amount: MoneyCents,
    ) -> ResultEngine<Record> {
        let label = normalize_label(label)?;
        let record = Record::new(category, label, amount)?;

        self.totals.add(record.category(), record.amount())?;
        self.history.append(record.clone());
        self.ranking.push(record.clone());
        self.pending.enqueue(record.clone());
        self.undo.record_add(record.clone());
        self.dirty = true;

        tracing::debug!("added {record}");
        Ok(record)
    }

    /// Takes back the most recent add that has not been undone yet.
    ///
    /// Returns [`EngineError::EmptyLog`] when there is nothing to undo.
    pub fn undo(&mut self) -> ResultEngine<Record> {
        let record = self.undo.pop_undo().ok_or(EngineError::EmptyLog)?;

        // The log may have been sorted since the add.
        let removed = if self.history.last() == Some(&record) {
            self.history.remove_last()
        } else {
            self.history.remove_latest(&record)
        };
        if let Err(err) = removed {
            tracing::warn!("undo could not find {record} in the history: {err}");
            self.undo.push_undo(record);
            return Err(err);
        }

        self.totals.subtract(record.category(), record.amount());
        self.ranking.remove(&record);
        let was_pending = self.pending.withdraw(&record);
        self.undo.push_redo(Undone {
            record: record.clone(),
            was_pending,
        });
        self.dirty = true;

        tracing::debug!("undid {record}");
        Ok(record)
    }

    /// Reapplies the most recently undone record.
    ///
    /// Returns [`EngineError::NothingToRedo`] when the redo stack is empty.
    pub fn redo(&mut self) -> ResultEngine<Record> {
        let Undone {
            record,
            was_pending,
        } = self.undo.pop_redo().ok_or(EngineError::NothingToRedo)?;

        if let Err(err) = self.totals.add(record.category(), record.amount()) {
            self.undo.push_redo(Undone {
                record,
                was_pending,
            });
            return Err(err);
        }
        self.history.append(record.clone());
        self.ranking.push(record.clone());
        if was_pending {
            self.pending.enqueue(record.clone());
        }
        self.undo.push_undo(record.clone());
        self.dirty = true;

        tracing::debug!("redid {record}");
        Ok(record)
    }

    /// Reorders the history in place. Later reads and the next snapshot see
    /// the new order.
    pub fn sort_by(&mut self, key: SortKey) {
        self.history.sort_by(key);
        self.dirty = true;
        tracing::debug!("history sorted by {key:?}");
    }

    /// Takes every pending record, oldest first. A second call right after
    /// returns nothing.
    pub fn drain_queue(&mut self) -> Vec<Record> {
        let drained = self.pending.drain_all();
        tracing::info!("processed {} pending transactions", drained.len());
        drained
    }
}
