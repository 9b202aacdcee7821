use std::cmp::Reverse;
use std::collections::BinaryHeap;
use log::trace;

use crate::data_structures::FrontierQueue;
use crate::graph::Weight;
use crate::{Error, Result};

/// A wrapper around BinaryHeap that implements decrease-key by lazy deletion
///
/// A decrease pushes a second entry and leaves the old one in place. `current` holds
/// the authoritative distance of every queued vertex, mirroring the search's distance
/// table, and extraction drops any entry that no longer matches it.
#[derive(Debug)]
pub struct LazyFrontier<W>
where
    W: Weight,
{
    /// The underlying binary heap, possibly holding superseded entries
    heap: BinaryHeap<Reverse<(W, usize)>>,

    /// Authoritative distance per queued vertex
    current: Vec<Option<W>>,

    /// Number of vertices with an active entry
    active: usize,

    /// Superseded entries popped and thrown away so far
    stale: usize,
}

impl<W> LazyFrontier<W>
where
    W: Weight,
{
    /// Creates an empty queue able to hold the vertices `0..vertex_count`
    pub fn with_capacity(vertex_count: usize) -> Self {
        LazyFrontier {
            heap: BinaryHeap::new(),
            current: vec![None; vertex_count],
            active: 0,
            stale: 0,
        }
    }

    /// Number of physical entries, stale ones included
    pub fn physical_len(&self) -> usize {
        self.heap.len()
    }

    fn slot(&self, vertex: usize) -> Result<Option<W>> {
        self.current
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }
}

impl<W> FrontierQueue<W> for LazyFrontier<W>
where
    W: Weight,
{
    fn insert(&mut self, vertex: usize, distance: W) -> Result<()> {
        if self.slot(vertex)?.is_some() {
            return Err(Error::DuplicateEntry(vertex));
        }

        self.current[vertex] = Some(distance);
        self.active += 1;
        self.heap.push(Reverse((distance, vertex)));
        Ok(())
    }

    fn decrease(&mut self, vertex: usize, distance: W) -> Result<()> {
        let queued = self.slot(vertex)?.ok_or(Error::MissingEntry(vertex))?;
        if distance >= queued {
            return Err(Error::KeyNotDecreased(vertex));
        }

        self.current[vertex] = Some(distance);
        self.heap.push(Reverse((distance, vertex)));
        Ok(())
    }

    fn extract_min(&mut self) -> Result<(usize, W)> {
        while let Some(Reverse((distance, vertex))) = self.heap.pop() {
            if self.current[vertex] == Some(distance) {
                self.current[vertex] = None;
                self.active -= 1;
                return Ok((vertex, distance));
            }
            trace!("Discarding stale entry ({:?}, {})", distance, vertex);
            self.stale += 1;
        }
        Err(Error::QueueEmpty)
    }

    fn len(&self) -> usize {
        self.active
    }

    fn stale_discarded(&self) -> usize {
        self.stale
    }
}
