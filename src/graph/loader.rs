//! JSON graph documents
//!
//! Two shapes are accepted. An adjacency document lists the outgoing edges of every
//! vertex in index order:
//!
//! ```json
//! { "adjacency": [[{ "to": 1, "weight": 1 }], []] }
//! ```
//!
//! An edge-list document names the vertex count and every edge explicitly:
//!
//! ```json
//! { "vertex_count": 2, "edges": [{ "from": 0, "to": 1, "weight": 1 }] }
//! ```
//!
//! Weights are signed so that negative values load and are then rejected by query
//! validation with a precise error.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, Edge, WeightedGraph, MAX_VERTICES};
use crate::{Error, Result};

/// One edge in an edge-list document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

/// On-disk representation of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphDocument {
    Adjacency {
        adjacency: Vec<Vec<Edge<i64>>>,
    },
    EdgeList {
        vertex_count: usize,
        edges: Vec<EdgeRecord>,
    },
}

impl GraphDocument {
    /// Builds the in-memory graph, checking the vertex count and edge endpoints for edge lists
    pub fn into_graph(self) -> Result<DirectedGraph<i64>> {
        match self {
            GraphDocument::Adjacency { adjacency } => Ok(DirectedGraph::from_adjacency(adjacency)),
            GraphDocument::EdgeList {
                vertex_count,
                edges,
            } => {
                if vertex_count > MAX_VERTICES {
                    return Err(Error::TooManyVertices {
                        requested: vertex_count as u128,
                        limit: MAX_VERTICES,
                    });
                }
                let mut graph = DirectedGraph::with_vertices(vertex_count);
                for record in edges {
                    graph.add_edge(record.from, record.to, record.weight)?;
                }
                Ok(graph)
            }
        }
    }
}

/// Parses a graph from a JSON string
pub fn from_json_str(json: &str) -> Result<DirectedGraph<i64>> {
    let document: GraphDocument = serde_json::from_str(json)?;
    finish(document)
}

/// Parses a graph from any reader producing JSON
pub fn from_reader<R: Read>(reader: R) -> Result<DirectedGraph<i64>> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    finish(document)
}

/// Loads a graph from a JSON file
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<DirectedGraph<i64>> {
    let path = path.as_ref();
    debug!("Loading graph from {}", path.display());
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

fn finish(document: GraphDocument) -> Result<DirectedGraph<i64>> {
    let graph = document.into_graph()?;
    debug!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
