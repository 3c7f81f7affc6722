//! Per-search transient storage.
//!
//! Costs and predecessors live here, indexed like the grid, instead of on the
//! grid cells. A generation counter invalidates every record at the start of
//! a search without touching the array.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Predecessor sentinel for the start cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Transient search record of one cell.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    /// Sequence number of the newest heap entry for this node.
    pub(crate) seq: u64,
    /// Search the record belongs to; older records count as unvisited.
    pub(crate) generation: u32,
    /// In the open set (`true`) or the closed set (`false`).
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: NO_PARENT,
            seq: 0,
            generation: 0,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// OpenEntry
// ---------------------------------------------------------------------------

/// Open-set heap entry.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lowest `f` first,
/// then the lowest `h`, then the oldest entry.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) h: f64,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

// ---------------------------------------------------------------------------
// Scratch
// ---------------------------------------------------------------------------

/// Reusable arrays for one search at a time.
///
/// Nothing here is allocated again once it has grown to the largest grid
/// searched so far.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    pub(crate) nodes: Vec<Node>,
    pub(crate) open: BinaryHeap<OpenEntry>,
    pub(crate) generation: u32,
    next_seq: u64,
}

impl Scratch {
    /// Start a new search over `len` cells and return its generation.
    pub(crate) fn begin(&mut self, len: usize) -> u32 {
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
        self.open.clear();
        self.next_seq = 0;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: records from 2^32 searches ago would look current.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Whether `idx` has a record in the current search.
    #[inline]
    pub(crate) fn visited(&self, idx: usize) -> bool {
        self.nodes[idx].generation == self.generation
    }

    /// Push `idx` on the open set with its current costs.
    pub(crate) fn push_open(&mut self, idx: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let n = &mut self.nodes[idx];
        n.seq = seq;
        n.open = true;
        self.open.push(OpenEntry {
            idx,
            f: n.f,
            h: n.h,
            seq,
        });
    }

    /// Pop the best open node, skipping entries superseded by a relaxation.
    /// The node is moved to the closed set.
    pub(crate) fn pop_open(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let n = &mut self.nodes[entry.idx];
            if n.generation != self.generation || !n.open || n.seq != entry.seq {
                continue;
            }
            n.open = false;
            return Some(entry.idx);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_node(s: &mut Scratch, idx: usize, g: f64, h: f64) {
        let generation = s.generation;
        let n = &mut s.nodes[idx];
        n.generation = generation;
        n.g = g;
        n.h = h;
        n.f = g + h;
        s.push_open(idx);
    }

    #[test]
    fn begin_grows_and_invalidates() {
        let mut s = Scratch::default();
        let g1 = s.begin(4);
        assert_eq!(s.nodes.len(), 4);
        open_node(&mut s, 2, 1.0, 1.0);
        assert!(s.visited(2));

        let g2 = s.begin(2);
        assert_ne!(g1, g2);
        assert_eq!(s.nodes.len(), 4);
        assert!(!s.visited(2));
        assert!(s.open.is_empty());
    }

    #[test]
    fn pops_lowest_f_then_lowest_h_then_oldest() {
        let mut s = Scratch::default();
        s.begin(5);
        open_node(&mut s, 0, 3.0, 2.0);
        open_node(&mut s, 1, 1.0, 4.0);
        open_node(&mut s, 2, 4.0, 1.0);
        open_node(&mut s, 3, 1.0, 4.0);
        open_node(&mut s, 4, 5.0, 0.0);
        // f = 5 for all but node 4; node 4 has h = 0.
        assert_eq!(s.pop_open(), Some(4));
        assert_eq!(s.pop_open(), Some(2));
        assert_eq!(s.pop_open(), Some(0));
        assert_eq!(s.pop_open(), Some(1));
        assert_eq!(s.pop_open(), Some(3));
        assert_eq!(s.pop_open(), None);
        assert!(!s.nodes[1].open);
    }

    #[test]
    fn stale_entries_are_skipped() {
        let mut s = Scratch::default();
        s.begin(2);
        open_node(&mut s, 0, 5.0, 1.0);
        open_node(&mut s, 1, 4.0, 1.0);
        // Relax node 0 below node 1.
        open_node(&mut s, 0, 2.0, 1.0);
        assert_eq!(s.pop_open(), Some(0));
        assert_eq!(s.pop_open(), Some(1));
        assert_eq!(s.pop_open(), None);
    }

    #[test]
    fn generation_wraps_to_one() {
        let mut s = Scratch::default();
        s.begin(1);
        s.nodes[0].generation = s.generation;
        s.generation = u32::MAX;
        assert_eq!(s.begin(1), 1);
        assert!(!s.visited(0));
    }
}
