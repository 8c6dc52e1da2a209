//! The ordered log of every live record.

use crate::{EngineError, MoneyCents, Record, ResultEngine, SortKey};

#[derive(Clone, Debug, Default)]
pub struct HistoryLog {
    records: Vec<Record>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn remove_last(&mut self) -> ResultEngine<Record> {
        self.records.pop().ok_or(EngineError::EmptyLog)
    }

    /// Removes the most recent entry equal to `record`.
    ///
    /// After a sort the record to take back is not necessarily the last one.
    pub fn remove_latest(&mut self, record: &Record) -> ResultEngine<Record> {
        if self.records.is_empty() {
            return Err(EngineError::EmptyLog);
        }
        match self.records.iter().rposition(|r| r == record) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(EngineError::NotFound(format!("matching {record}"))),
        }
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stable ascending sort, in place.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Amount => self.records.sort_by_key(Record::amount),
            SortKey::Label => self.records.sort_by(|a, b| a.label().cmp(b.label())),
        }
    }

    /// First record with the smallest amount, scanning the whole log.
    pub fn min(&self) -> Option<&Record> {
        self.records.iter().min_by_key(|r| r.amount())
    }

    pub fn find_by_label(&self, text: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.label().contains(text))
            .cloned()
            .collect()
    }

    pub fn find_by_amount(&self, amount: MoneyCents) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.amount() == amount)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn record(label: &str, cents: i64) -> Record {
        Record::new(Category::Expense, label, MoneyCents::new(cents)).unwrap()
    }

    fn labels(log: &HistoryLog) -> Vec<&str> {
        log.all().iter().map(Record::label).collect()
    }

    #[test]
    fn remove_last_on_empty_log() {
        let mut log = HistoryLog::new();
        assert_eq!(log.remove_last(), Err(EngineError::EmptyLog));
    }

    #[test]
    fn sort_by_amount_is_stable() {
        let mut log = HistoryLog::new();
        log.append(record("b", 500));
        log.append(record("a", 100));
        log.append(record("c", 500));
        log.append(record("d", 100));

        log.sort_by(SortKey::Amount);

        assert_eq!(labels(&log), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn sort_by_label_is_case_sensitive() {
        let mut log = HistoryLog::new();
        log.append(record("rent", 1));
        log.append(record("Salary", 2));
        log.append(record("Bills", 3));

        log.sort_by(SortKey::Label);

        assert_eq!(labels(&log), vec!["Bills", "Salary", "rent"]);
    }

    #[test]
    fn min_prefers_earliest_tie() {
        let mut log = HistoryLog::new();
        assert!(log.min().is_none());
        log.append(record("x", 300));
        log.append(record("first", 100));
        log.append(record("second", 100));

        assert_eq!(log.min().unwrap().label(), "first");
    }

    #[test]
    fn remove_latest_takes_the_most_recent_match() {
        let mut log = HistoryLog::new();
        log.append(record("a", 1));
        log.append(record("b", 2));
        log.append(record("a", 1));
        log.append(record("c", 3));

        let removed = log.remove_latest(&record("a", 1)).unwrap();

        assert_eq!(removed, record("a", 1));
        assert_eq!(labels(&log), vec!["a", "b", "c"]);
        assert!(matches!(
            log.remove_latest(&record("z", 9)),
            Err(EngineError::NotFound(_))
        ));
    }

    #[test]
    fn substring_search() {
        let mut log = HistoryLog::new();
        log.append(record("Groceries", 1));
        log.append(record("grocery run", 2));
        log.append(record("Rent", 3));

        let found = log.find_by_label("roc");
        assert_eq!(found.len(), 2);
        assert!(log.find_by_label("GROC").is_empty());
    }
}
