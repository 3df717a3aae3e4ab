use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Min-priority queue on a binary heap.
///
/// Lower priorities pop first; equal priorities pop in push order. The
/// stored values never take part in the ordering, so `T` needs no `Ord`.
///
/// ```
/// use aoc_solutions::utils::collections::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.push("far", 9);
/// queue.push("near", 1);
/// queue.push("also near", 1);
///
/// assert_eq!(queue.pop(), Some(("near", 1)));
/// assert_eq!(queue.pop(), Some(("also near", 1)));
/// assert_eq!(queue.pop(), Some(("far", 9)));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = u32> {
    heap: BinaryHeap<Entry<T, P>>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    value: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    // BinaryHeap is a max-heap: invert so the smallest (priority, seq) is on top
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T, P: Ord + Copy> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert `value` with `priority`. O(log n).
    pub fn push(&mut self, value: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            value,
        });
    }

    /// Remove the lowest-priority value. O(log n).
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|entry| (entry.value, entry.priority))
    }

    /// Priority of the value `pop` would return next
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P: Ord + Copy> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
