use crate::data_structures::FrontierQueue;
use crate::graph::Weight;
use crate::{Error, Result};

/// Unordered frontier that finds the minimum by scanning every vertex
///
/// O(V) per extraction. It is the selection strategy of the textbook array
/// formulation and serves as an oracle for the heap-backed queues: scanning in index
/// order with a strict comparison stops at the lowest index among equal distances.
#[derive(Debug, Clone)]
pub struct LinearScanFrontier<W> {
    queued: Vec<Option<W>>,
    active: usize,
}

impl<W> LinearScanFrontier<W>
where
    W: Weight,
{
    /// Creates an empty queue able to hold the vertices `0..vertex_count`
    pub fn with_capacity(vertex_count: usize) -> Self {
        LinearScanFrontier {
            queued: vec![None; vertex_count],
            active: 0,
        }
    }

    fn slot(&self, vertex: usize) -> Result<Option<W>> {
        self.queued
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }
}

impl<W> FrontierQueue<W> for LinearScanFrontier<W>
where
    W: Weight,
{
    fn insert(&mut self, vertex: usize, distance: W) -> Result<()> {
        if self.slot(vertex)?.is_some() {
            return Err(Error::DuplicateEntry(vertex));
        }
        self.queued[vertex] = Some(distance);
        self.active += 1;
        Ok(())
    }

    fn decrease(&mut self, vertex: usize, distance: W) -> Result<()> {
        let queued = self.slot(vertex)?.ok_or(Error::MissingEntry(vertex))?;
        if distance >= queued {
            return Err(Error::KeyNotDecreased(vertex));
        }
        self.queued[vertex] = Some(distance);
        Ok(())
    }

    fn extract_min(&mut self) -> Result<(usize, W)> {
        let mut lowest: Option<(usize, W)> = None;
        for (vertex, queued) in self.queued.iter().enumerate() {
            if let Some(distance) = *queued {
                match lowest {
                    Some((_, best)) if distance >= best => {}
                    _ => lowest = Some((vertex, distance)),
                }
            }
        }

        let (vertex, distance) = lowest.ok_or(Error::QueueEmpty)?;
        self.queued[vertex] = None;
        self.active -= 1;
        Ok((vertex, distance))
    }

    fn len(&self) -> usize {
        self.active
    }
}
