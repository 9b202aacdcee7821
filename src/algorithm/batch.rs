use log::debug;
use rayon::prelude::*;

use crate::algorithm::engine::PathEngine;
use crate::graph::{Weight, WeightedGraph};
use crate::Result;

/// Answers many `(source, sink)` queries over one graph in parallel
///
/// Each query builds its own tables and frontier; the graph is only read. Results are
/// returned in query order, and one failing query does not affect the others.
pub fn shortest_paths_batch<W, G>(
    engine: &PathEngine,
    graph: &G,
    queries: &[(usize, usize)],
) -> Vec<Result<Vec<usize>>>
where
    W: Weight,
    G: WeightedGraph<W> + Sync,
{
    debug!("Running {} queries in parallel", queries.len());
    queries
        .par_iter()
        .map(|&(source, sink)| engine.shortest_path(graph, source, sink))
        .collect()
}
