use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use fxhash::FxHashMap;

use crate::error::{GraphError, Result};

/// A map from keys to priorities which hands out the key with the smallest priority.
///
/// Setting the priority of a key that is already pending overwrites it, which is how
/// Dijkstra tightens tentative distances. Outdated heap entries are left in place and
/// skipped when they surface, so `set` and `pop_minimum` take amortized $O(\log n)$ time.
///
/// Keys with equal priority are popped in the order in which their priority was last set.
#[derive(Debug, Clone)]
pub struct PriorityMap<K, P> {
    heap: BinaryHeap<Reverse<(P, u64, K)>>,
    pending: FxHashMap<K, (P, u64)>,
    stamp: u64
}

impl<K, P> Default for PriorityMap<K, P> where K: Copy + Ord + Hash, P: Copy + Ord {
    fn default() -> Self {
        PriorityMap::new()
    }
}

impl<K, P> PriorityMap<K, P> where K: Copy + Ord + Hash, P: Copy + Ord {
    pub fn new() -> Self {
        PriorityMap { heap: BinaryHeap::new(), pending: FxHashMap::default(), stamp: 0 }
    }

    /// Inserts `key` or overwrites its pending priority.
    pub fn set(&mut self, key:K, priority:P) {
        self.stamp += 1;
        self.pending.insert(key, (priority, self.stamp));
        self.heap.push(Reverse((priority, self.stamp, key)));
    }

    /// Removes and returns the key with the smallest priority.
    pub fn pop_minimum(&mut self) -> Result<(K, P)> {
        while let Some(Reverse((priority, stamp, key))) = self.heap.pop() {
            if self.pending.get(&key) == Some(&(priority, stamp)) {
                self.pending.remove(&key);
                return Ok((key, priority));
            }
        }

        Err(GraphError::EmptyPriorityMap)
    }

    pub fn get(&self, key:&K) -> Option<P> {
        self.pending.get(key).map(|(p, _)| *p)
    }

    pub fn contains(&self, key:&K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
