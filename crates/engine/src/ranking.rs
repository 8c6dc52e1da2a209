//! Max-by-amount access to the live records.
//!
//! A binary max-heap ordered by amount. Equal amounts rank by insertion
//! order, the earliest first. Removal is lazy: a removed record is counted in
//! `retired` and dropped once it reaches the top, so the top of the heap is
//! always a live record.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use crate::{EngineError, MoneyCents, Record, ResultEngine};

#[derive(Clone, Debug)]
struct Ranked {
    amount: MoneyCents,
    seq: u64,
    record: Record,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Clone, Debug, Default)]
pub struct RankingHeap {
    heap: BinaryHeap<Ranked>,
    live: HashMap<Record, usize>,
    retired: HashMap<Record, usize>,
    next_seq: u64,
}

impl RankingHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        *self.live.entry(record.clone()).or_default() += 1;

        // An equal record still buried in the heap is revived instead.
        if let Some(count) = self.retired.get_mut(&record) {
            *count -= 1;
            if *count == 0 {
                self.retired.remove(&record);
            }
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Ranked {
            amount: record.amount(),
            seq,
            record,
        });
    }

    /// Retires one live instance of `record`. Returns `false` if none is live.
    pub fn remove(&mut self, record: &Record) -> bool {
        match self.live.get_mut(record) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.live.remove(record);
                }
            }
            _ => return false,
        }
        *self.retired.entry(record.clone()).or_default() += 1;
        self.prune();
        true
    }

    pub fn peek_max(&self) -> ResultEngine<&Record> {
        self.heap
            .peek()
            .map(|ranked| &ranked.record)
            .ok_or(EngineError::EmptyStructure)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.live.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn prune(&mut self) {
        while let Some(top) = self.heap.peek() {
            let Some(count) = self.retired.get_mut(&top.record) else {
                break;
            };
            *count -= 1;
            if *count == 0 {
                self.retired.remove(&top.record);
            }
            self.heap.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn record(label: &str, cents: i64) -> Record {
        Record::new(Category::Income, label, MoneyCents::new(cents)).unwrap()
    }

    #[test]
    fn empty_heap_signals_empty_structure() {
        let heap = RankingHeap::new();
        assert_eq!(heap.peek_max(), Err(EngineError::EmptyStructure));
    }

    #[test]
    fn peek_returns_largest_amount() {
        let mut heap = RankingHeap::new();
        heap.push(record("small", 100));
        heap.push(record("large", 9_000));
        heap.push(record("medium", 500));

        assert_eq!(heap.peek_max().unwrap().label(), "large");
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn ties_go_to_the_earliest_insert() {
        let mut heap = RankingHeap::new();
        heap.push(record("first", 700));
        heap.push(record("second", 700));

        assert_eq!(heap.peek_max().unwrap().label(), "first");
    }

    #[test]
    fn removing_the_top_exposes_the_next_live_record() {
        let mut heap = RankingHeap::new();
        heap.push(record("a", 100));
        heap.push(record("b", 300));
        heap.push(record("c", 200));

        assert!(heap.remove(&record("c", 200)));
        assert_eq!(heap.peek_max().unwrap().label(), "b");

        assert!(heap.remove(&record("b", 300)));
        assert_eq!(heap.peek_max().unwrap().label(), "a");
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn removing_everything_empties_the_heap() {
        let mut heap = RankingHeap::new();
        heap.push(record("a", 100));
        heap.push(record("b", 50));

        assert!(heap.remove(&record("b", 50)));
        assert!(heap.remove(&record("a", 100)));

        assert!(heap.is_empty());
        assert_eq!(heap.peek_max(), Err(EngineError::EmptyStructure));
    }

    #[test]
    fn remove_unknown_record_is_refused() {
        let mut heap = RankingHeap::new();
        heap.push(record("a", 100));

        assert!(!heap.remove(&record("z", 100)));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn push_revives_a_buried_retired_record() {
        let mut heap = RankingHeap::new();
        heap.push(record("top", 1_000));
        heap.push(record("buried", 10));

        assert!(heap.remove(&record("buried", 10)));
        heap.push(record("buried", 10));
        assert!(heap.remove(&record("top", 1_000)));

        assert_eq!(heap.peek_max().unwrap().label(), "buried");
        assert_eq!(heap.len(), 1);
    }
}
