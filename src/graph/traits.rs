use std::fmt::Debug;
use serde::{Deserialize, Serialize};

use crate::graph::Weight;
use crate::{Error, Result};

/// A directed, weighted edge as seen from its tail vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<W> {
    /// Head vertex of the edge
    pub to: usize,
    /// Cost of traversing the edge
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(to: usize, weight: W) -> Self {
        Edge { to, weight }
    }
}

/// Trait representing a read-only weighted directed graph
///
/// Vertices are the dense indices `0..vertex_count()`. The graph is only ever borrowed
/// immutably by a query, so any number of queries may share one graph.
pub trait WeightedGraph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in their stored order
    fn neighbors(&self, vertex: usize) -> Result<Box<dyn Iterator<Item = Edge<W>> + '_>>;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .filter_map(|v| self.neighbors(v).ok())
            .map(|edges| edges.count())
            .sum()
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of the first stored edge between two vertices
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .ok()?
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Checks every edge: heads must be in range and weights non-negative
    fn validate(&self) -> Result<()> {
        let n = self.vertex_count();
        for from in 0..n {
            for edge in self.neighbors(from)? {
                if edge.to >= n {
                    return Err(Error::InvalidEdge(from, edge.to));
                }
                if edge.weight.is_negative() {
                    return Err(Error::NegativeWeight {
                        from,
                        to: edge.to,
                        weight: format!("{:?}", edge.weight),
                    });
                }
            }
        }
        Ok(())
    }
}
