//! Shortest Route - lowest-cost path search between two vertices
//!
//! This library answers single-pair shortest path queries on directed graphs with
//! non-negative edge weights. The search is Dijkstra's relaxation loop driven by a
//! pluggable frontier queue: an indexed binary heap with true decrease-key by default,
//! a lazy-deletion heap, or the linear scan kept as a reference oracle.
//!
//! ```
//! use shortest_route::{shortest_path, DirectedGraph};
//!
//! let mut graph = DirectedGraph::with_vertices(3);
//! graph.add_edge(0, 1, 4u32).unwrap();
//! graph.add_edge(1, 2, 1u32).unwrap();
//! graph.add_edge(0, 2, 7u32).unwrap();
//!
//! assert_eq!(shortest_path(&graph, 0, 2).unwrap(), vec![0, 1, 2]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

/// Re-export main types for convenient use
pub use algorithm::{
    engine::{EngineConfig, FrontierStrategy, PathEngine},
    reconstruct::reconstruct,
    Route, SearchStats, ShortestPathAlgorithm, ShortestPathTree, VertexState,
};
pub use graph::{DirectedGraph, Edge, Weight, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Frontier queue is empty")]
    QueueEmpty,

    #[error("Vertex {0} is already queued")]
    DuplicateEntry(usize),

    #[error("Vertex {0} is not queued")]
    MissingEntry(usize),

    #[error("New distance for vertex {0} does not improve on its queued distance")]
    KeyNotDecreased(usize),

    #[error("Distance overflow relaxing edge {from} -> {to}")]
    DistanceOverflow { from: usize, to: usize },

    #[error("Graph of {requested} vertices exceeds the limit of {limit}")]
    TooManyVertices { requested: u128, limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the lowest-cost path from `source` to `sink` as an ordered vertex sequence.
///
/// An empty vector means `sink` cannot be reached. A non-empty vector always starts
/// with `source` and ends with `sink`. Out-of-range endpoints and negative weights are
/// rejected before any search state is built.
pub fn shortest_path<W, G>(graph: &G, source: usize, sink: usize) -> Result<Vec<usize>>
where
    W: Weight,
    G: WeightedGraph<W>,
{
    PathEngine::new().shortest_path(graph, source, sink)
}
