//! Undo/redo stacks.
//!
//! Both stacks hold plain records, not snapshots of the log: undo only ever
//! reverses the most recent add that has not been reversed yet.

use crate::Record;

/// A record taken back by undo, waiting for redo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undone {
    pub record: Record,
    /// The record was still queued for processing when it was undone.
    pub was_pending: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UndoRedo {
    undo: Vec<Record>,
    redo: Vec<Undone>,
}

impl UndoRedo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new forward action invalidates the redo history.
    pub fn record_add(&mut self, record: Record) {
        self.undo.push(record);
        self.redo.clear();
    }

    pub fn pop_undo(&mut self) -> Option<Record> {
        self.undo.pop()
    }

    pub fn push_undo(&mut self, record: Record) {
        self.undo.push(record);
    }

    pub fn pop_redo(&mut self) -> Option<Undone> {
        self.redo.pop()
    }

    pub fn push_redo(&mut self, undone: Undone) {
        self.redo.push(undone);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, MoneyCents};

    fn record(label: &str) -> Record {
        Record::new(Category::Expense, label, MoneyCents::new(100)).unwrap()
    }

    #[test]
    fn add_clears_redo() {
        let mut stacks = UndoRedo::new();
        stacks.record_add(record("a"));
        let a = stacks.pop_undo().unwrap();
        stacks.push_redo(Undone {
            record: a,
            was_pending: true,
        });
        assert!(stacks.can_redo());

        stacks.record_add(record("b"));

        assert!(!stacks.can_redo());
        assert!(stacks.can_undo());
    }

    #[test]
    fn stacks_are_lifo() {
        let mut stacks = UndoRedo::new();
        stacks.record_add(record("a"));
        stacks.record_add(record("b"));

        assert_eq!(stacks.pop_undo().unwrap().label(), "b");
        assert_eq!(stacks.pop_undo().unwrap().label(), "a");
        assert!(stacks.pop_undo().is_none());
    }
}
