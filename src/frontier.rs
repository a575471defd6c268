//! The open set of the search: a [BinaryHeap] of grid indices ordered so that the entry
//! with the smallest estimated total cost is popped first.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Cost;

#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub estimated_cost: Cost,
    pub cost: Cost,
    pub index: usize,
    seq: u64,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the entry furthest from the start,
        // then the one pushed first. The sequence number is unique so this is a total order.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    pub fn push(&mut self, index: usize, cost: Cost, estimated_cost: Cost) {
        self.heap.push(FrontierEntry {
            estimated_cost,
            cost,
            index,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
