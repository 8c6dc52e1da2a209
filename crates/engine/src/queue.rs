//! FIFO of records waiting to be processed once.

use std::collections::VecDeque;

use crate::Record;

#[derive(Clone, Debug, Default)]
pub struct PendingQueue {
    items: VecDeque<Record>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, record: Record) {
        self.items.push_back(record);
    }

    /// Empties the queue, oldest first.
    pub fn drain_all(&mut self) -> Vec<Record> {
        self.items.drain(..).collect()
    }

    /// Drops the most recently queued record equal to `record`, if any.
    pub fn withdraw(&mut self, record: &Record) -> bool {
        match self.items.iter().rposition(|r| r == record) {
            Some(index) => self.items.remove(index).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
