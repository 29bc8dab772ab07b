use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry, ordered by `(f, seq)` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) f: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set of one search run: a min-heap on `(f, seq)` plus a membership
/// table indexed by cell.
///
/// A cell is pushed at most once while it is a member; its key is not
/// updated if its f-score later improves.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    members: Vec<bool>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: vec![false; cells],
            next_seq: 0,
        }
    }

    /// Push `idx` with priority `f`, assigning the next sequence number.
    pub(crate) fn push(&mut self, idx: usize, f: i32) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, seq, idx });
        self.members[idx] = true;
        seq
    }

    /// Pop the entry with the smallest `(f, seq)` and drop it from the
    /// membership table.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        let e = self.heap.pop()?;
        self.members[e.idx] = false;
        Some(e)
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.members[idx]
    }
}
