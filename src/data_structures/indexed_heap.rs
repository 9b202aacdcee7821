use crate::data_structures::FrontierQueue;
use crate::graph::Weight;
use crate::{Error, Result};

/// Binary min-heap with a vertex -> slot index, giving true O(log n) decrease-key
///
/// `heap` stores `(distance, vertex)` pairs in the usual implicit-tree layout and
/// `positions[v]` is the slot currently holding vertex `v`, or `None` when `v` is not
/// queued. Every swap keeps the two in sync.
#[derive(Debug, Clone)]
pub struct IndexedFrontier<W> {
    heap: Vec<(W, usize)>,
    positions: Vec<Option<usize>>,
}

impl<W> IndexedFrontier<W>
where
    W: Weight,
{
    /// Creates an empty queue able to hold the vertices `0..vertex_count`
    pub fn with_capacity(vertex_count: usize) -> Self {
        IndexedFrontier {
            heap: Vec::new(),
            positions: vec![None; vertex_count],
        }
    }

    /// Returns the minimum entry without removing it
    pub fn peek_min(&self) -> Option<(usize, W)> {
        self.heap.first().map(|&(distance, vertex)| (vertex, distance))
    }

    /// Returns true if the vertex has an active entry
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.positions.get(vertex), Some(Some(_)))
    }

    /// Current queued distance of a vertex
    pub fn priority(&self, vertex: usize) -> Option<W> {
        let slot = (*self.positions.get(vertex)?)?;
        Some(self.heap[slot].0)
    }

    fn parent(slot: usize) -> usize {
        (slot - 1) / 2
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].1] = Some(a);
        self.positions[self.heap[b].1] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = Self::parent(slot);
            if self.heap[slot] >= self.heap[parent] {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.positions.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}

impl<W> FrontierQueue<W> for IndexedFrontier<W>
where
    W: Weight,
{
    fn insert(&mut self, vertex: usize, distance: W) -> Result<()> {
        self.check_vertex(vertex)?;
        if self.contains(vertex) {
            return Err(Error::DuplicateEntry(vertex));
        }

        let slot = self.heap.len();
        self.heap.push((distance, vertex));
        self.positions[vertex] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    fn decrease(&mut self, vertex: usize, distance: W) -> Result<()> {
        self.check_vertex(vertex)?;
        let slot = self.positions[vertex].ok_or(Error::MissingEntry(vertex))?;
        if distance >= self.heap[slot].0 {
            return Err(Error::KeyNotDecreased(vertex));
        }

        self.heap[slot].0 = distance;
        self.sift_up(slot);
        Ok(())
    }

    fn extract_min(&mut self) -> Result<(usize, W)> {
        if self.heap.is_empty() {
            return Err(Error::QueueEmpty);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (distance, vertex) = self.heap.pop().ok_or(Error::QueueEmpty)?;
        self.positions[vertex] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((vertex, distance))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
