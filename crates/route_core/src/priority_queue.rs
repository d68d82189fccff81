use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

/// Priority queue implementation using a binary heap.
/// The heap is a min heap, so the element with the lowest tentative distance
/// is always at the top.
///
/// There is no decrease-key: a node whose distance improves is pushed again and
/// the outdated entry stays in the heap until it is popped.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<HeapItem>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: HeapItem) {
        self.heap.push(item);
    }

    pub fn pop(&mut self) -> Option<HeapItem> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Frontier entry of a search. Ordered by distance only, ties are popped in
/// no particular order.
#[derive(Copy, Clone, Debug)]
pub struct HeapItem {
    pub distance: Weight,
    pub node: NodeIndex,
}

impl HeapItem {
    pub fn new(distance: Weight, node: NodeIndex) -> Self {
        HeapItem { distance, node }
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for HeapItem {}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the ordering so that the smallest element is at the top of the heap.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}
