use crate::graph::Weight;
use crate::Result;

/// Priority structure holding the discovered-but-unfinalized vertices of a search
///
/// Entries are ordered by `(distance, vertex)`: the smallest distance wins and equal
/// distances go to the lower vertex index, whatever order the entries arrived in.
/// Each vertex has at most one logically active entry.
pub trait FrontierQueue<W: Weight> {
    /// Queues a vertex that has no active entry
    fn insert(&mut self, vertex: usize, distance: W) -> Result<()>;

    /// Lowers the distance of a queued vertex; the new distance must be strictly smaller
    fn decrease(&mut self, vertex: usize, distance: W) -> Result<()>;

    /// Removes and returns the active entry with the smallest `(distance, vertex)`
    fn extract_min(&mut self) -> Result<(usize, W)>;

    /// Number of logically active entries
    fn len(&self) -> usize;

    /// Returns true if no vertex is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries discarded on extraction because a later decrease superseded them
    fn stale_discarded(&self) -> usize {
        0
    }
}
