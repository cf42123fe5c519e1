use log::trace;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue for Dijkstra without decrease-key.
///
/// A vertex whose priority improves is simply pushed again. The superseded
/// entry stays in the heap until [`LazyMinHeap::pop_fresh`] reaches it, asks
/// the caller whether it is stale and drops it. Equal priorities pop the
/// smaller vertex first.
#[derive(Debug)]
pub struct LazyMinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    discarded: usize,
}

impl<V, P> Default for LazyMinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> LazyMinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        LazyMinHeap {
            heap: BinaryHeap::new(),
            discarded: 0,
        }
    }

    /// Queues `vertex` at `priority`, leaving any older entry for it in place
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Pops the smallest entry that `is_stale` does not reject.
    ///
    /// Rejected entries are dropped and counted in [`LazyMinHeap::discarded`].
    pub fn pop_fresh<F>(&mut self, mut is_stale: F) -> Option<(V, P)>
    where
        F: FnMut(V, P) -> bool,
    {
        while let Some(Reverse((priority, vertex))) = self.heap.pop() {
            if is_stale(vertex, priority) {
                self.discarded += 1;
                trace!("Discarding stale entry for vertex {:?} at {:?}", vertex, priority);
                continue;
            }
            return Some((vertex, priority));
        }
        None
    }

    /// Number of stale entries dropped so far
    pub fn discarded(&self) -> usize {
        self.discarded
    }
}
