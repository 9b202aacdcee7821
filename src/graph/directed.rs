use crate::graph::traits::{Edge, WeightedGraph};
use crate::graph::Weight;
use crate::{Error, Result};

/// Largest vertex count accepted from untrusted sizes (documents, generator dimensions)
pub const MAX_VERTICES: usize = 1 << 26;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W> {
    /// Outgoing edges for each vertex: vertex_id -> [Edge]
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Wraps a ready-made adjacency list
    ///
    /// Nothing is checked here; edge heads and weights are validated when a query
    /// starts.
    pub fn from_adjacency(adjacency: Vec<Vec<Edge<W>>>) -> Self {
        DirectedGraph { adjacency }
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Appends a directed edge
    ///
    /// Parallel edges are kept. Any weight is accepted so that inadmissible weights
    /// surface as a query error rather than being dropped silently.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let n = self.adjacency.len();
        if from >= n || to >= n {
            return Err(Error::InvalidEdge(from, to));
        }
        self.adjacency[from].push(Edge::new(to, weight));
        Ok(())
    }

    /// Outgoing edges of a vertex as a slice
    pub fn edges(&self, vertex: usize) -> Result<&[Edge<W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Returns a copy of the graph with every edge reversed
    pub fn reversed(&self) -> Self {
        let mut reversed = DirectedGraph::with_vertices(self.adjacency.len());
        for (from, edges) in self.adjacency.iter().enumerate() {
            for edge in edges {
                if let Some(incoming) = reversed.adjacency.get_mut(edge.to) {
                    incoming.push(Edge::new(from, edge.weight));
                }
            }
        }
        reversed
    }
}

impl<W> WeightedGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: usize) -> Result<Box<dyn Iterator<Item = Edge<W>> + '_>> {
        Ok(Box::new(self.edges(vertex)?.iter().copied()))
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
