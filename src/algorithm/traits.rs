use serde::Serialize;

use crate::algorithm::reconstruct::reconstruct;
use crate::graph::{Weight, WeightedGraph};
use crate::Result;

/// Lifecycle of a vertex during one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    /// Never discovered
    Unvisited,
    /// Discovered, distance still tentative, queued in the frontier
    Frontier,
    /// Distance proven optimal, never revisited
    Finalized,
}

/// Counters collected while a query runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken from the frontier
    pub extractions: usize,
    /// Edges examined out of finalized vertices
    pub relaxations: usize,
    /// Relaxations that lowered an already queued distance
    pub decrease_keys: usize,
    /// Superseded entries the frontier dropped on extraction
    pub stale_skipped: usize,
}

/// Result of a shortest path search
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` for infinity
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// State of every vertex when the search stopped
    pub states: Vec<VertexState>,

    /// Finalized vertices in order, with the distance each had when finalized
    pub finalization_order: Vec<(usize, W)>,

    /// Source vertex ID
    pub source: usize,

    /// Sink the search was asked to stop at, if any
    pub sink: Option<usize>,

    pub stats: SearchStats,
}

impl<W> ShortestPathTree<W>
where
    W: Weight,
{
    /// Proven distance to a vertex, `None` if it was not finalized
    pub fn distance_to(&self, target: usize) -> Option<W> {
        match self.states.get(target) {
            Some(VertexState::Finalized) => self.distances[target],
            _ => None,
        }
    }

    /// Ordered vertex sequence from the source to `target`, empty unless `target` was finalized
    ///
    /// Predecessors of frontier vertices are still tentative after an early exit, so
    /// only finalized vertices get a path.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        match self.states.get(target) {
            Some(VertexState::Finalized) => reconstruct(&self.predecessors, self.source, target),
            _ => Vec::new(),
        }
    }

    /// Path and cost to `target`, `None` if unreachable
    pub fn route_to(&self, target: usize) -> Option<Route<W>> {
        let cost = self.distance_to(target)?;
        let path = self.path_to(target);
        if path.is_empty() {
            return None;
        }
        Some(Route {
            source: self.source,
            sink: target,
            path,
            cost,
        })
    }
}

/// A found path together with its total cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<W> {
    pub source: usize,
    pub sink: usize,
    pub path: Vec<usize>,
    pub cost: W,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: WeightedGraph<W>,
{
    /// Compute shortest paths from a source vertex to every reachable vertex
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathTree<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathTree<W>, target: usize) -> Vec<usize> {
        result.path_to(target)
    }
}
