use std::collections::HashMap;

use crate::{Category, EngineError, MoneyCents, Record, Report, ResultEngine};

use super::TransactionStore;

impl TransactionStore {
    /// Every live record, in history order.
    pub fn list_all(&self) -> &[Record] {
        self.history.all()
    }

    pub fn report(&self) -> Report {
        self.totals.report()
    }

    pub fn totals(&self) -> &HashMap<Category, MoneyCents> {
        self.totals.totals()
    }

    pub fn peek_max(&self) -> ResultEngine<&Record> {
        self.ranking.peek_max()
    }

    /// Smallest amount, found by scanning the history on every call.
    pub fn min_record(&self) -> ResultEngine<&Record> {
        self.history
            .min()
            .ok_or_else(|| EngineError::NotFound("in the history".to_string()))
    }

    /// Case-sensitive substring match on the label.
    pub fn find_by_label_substring(&self, text: &str) -> ResultEngine<Vec<Record>> {
        let found = self.history.find_by_label(text);
        if found.is_empty() {
            return Err(EngineError::NotFound(format!(
                "with description containing: {text}"
            )));
        }
        Ok(found)
    }

    pub fn find_by_amount(&self, amount: MoneyCents) -> ResultEngine<Vec<Record>> {
        let found = self.history.find_by_amount(amount);
        if found.is_empty() {
            return Err(EngineError::NotFound(format!("with amount: {amount}")));
        }
        Ok(found)
    }

    /// Owned copy of the history for persistence.
    pub fn snapshot(&self) -> Vec<Record> {
        self.history.all().to_vec()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }
}
