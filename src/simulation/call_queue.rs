//! Call queue pair for a single elevator car.
//!
//! Each car keeps two priority orderings: calls requesting up travel are
//! served in ascending floor order, calls requesting down travel in
//! descending floor order. Same-floor ties fall back to call arrival order
//! in both queues, so service within a floor stays first-come-first-served.

use std::cmp::{Ordering, Reverse};

use sorted_vec::SortedVec;

/// An accepted hall call waiting in a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub floor: u8,
    /// Per-car arrival counter; strictly increasing, never reused.
    pub seq: u64,
}

/// Ordering key for up travel: lowest floor first, earliest call first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UpCall(Call);

impl Ord for UpCall {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0.floor, self.0.seq).cmp(&(other.0.floor, other.0.seq))
    }
}

impl PartialOrd for UpCall {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering key for down travel: highest floor first, earliest call first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DownCall(Call);

impl Ord for DownCall {
    fn cmp(&self, other: &Self) -> Ordering {
        (Reverse(self.0.floor), self.0.seq).cmp(&(Reverse(other.0.floor), other.0.seq))
    }
}

impl PartialOrd for DownCall {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The pair of direction-keyed queues owned by one car.
///
/// Two dedicated ordered containers with explicit total orderings, rather
/// than one queue with a switchable comparator.
#[derive(Debug, Clone)]
pub struct CallQueues {
    up: SortedVec<UpCall>,
    down: SortedVec<DownCall>,
}

impl Default for CallQueues {
    fn default() -> Self {
        Self::new()
    }
}

impl CallQueues {
    pub fn new() -> Self {
        Self {
            up: SortedVec::new(),
            down: SortedVec::new(),
        }
    }

    /// Enqueue a call under the direction it requested.
    pub fn push(&mut self, floor: u8, seq: u64, going_up: bool) {
        let call = Call { floor, seq };
        if going_up {
            self.up.insert(UpCall(call));
        } else {
            self.down.insert(DownCall(call));
        }
    }

    /// Next up-travel call: lowest floor, then earliest arrival.
    pub fn pop_up(&mut self) -> Option<Call> {
        if self.up.is_empty() {
            None
        } else {
            Some(self.up.remove_index(0).0)
        }
    }

    /// Next down-travel call: highest floor, then earliest arrival.
    pub fn pop_down(&mut self) -> Option<Call> {
        if self.down.is_empty() {
            None
        } else {
            Some(self.down.remove_index(0).0)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }
}
