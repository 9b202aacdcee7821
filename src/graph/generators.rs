use crate::graph::{DirectedGraph, Edge, MAX_VERTICES};
use crate::{Error, Result};
use rand::Rng;

/// The 8-vertex directed graph used throughout the docs and tests, all weights 1
pub fn reference_graph() -> DirectedGraph<i64> {
    let adjacency: [&[usize]; 8] = [
        &[1],
        &[3, 4],
        &[4, 7],
        &[1, 5],
        &[1, 2],
        &[3, 6, 7],
        &[5, 7],
        &[2, 6, 5],
    ];

    DirectedGraph::from_adjacency(
        adjacency
            .iter()
            .map(|heads| heads.iter().map(|&to| Edge::new(to, 1)).collect())
            .collect(),
    )
}

/// Generates a random directed graph with roughly `edge_factor * n` edges
///
/// Weights are drawn uniformly from `1..=max_weight`. Self-loops are skipped, parallel
/// edges may occur.
pub fn random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> DirectedGraph<u64> {
    if n < 2 {
        return DirectedGraph::with_vertices(n);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    let mut adjacency: Vec<Vec<Edge<u64>>> = vec![Vec::new(); n];
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            adjacency[u].push(Edge::new(v, rng.gen_range(1..=max_weight.max(1))));
        }
    }

    DirectedGraph::from_adjacency(adjacency)
}

/// Generates a 4-connected grid graph with unit weights in both directions
///
/// Fails with `TooManyVertices` when `width * height` overflows or exceeds
/// [`MAX_VERTICES`].
pub fn grid_graph(width: usize, height: usize) -> Result<DirectedGraph<u32>> {
    let n = width
        .checked_mul(height)
        .filter(|&n| n <= MAX_VERTICES)
        .ok_or(Error::TooManyVertices {
            requested: width as u128 * height as u128,
            limit: MAX_VERTICES,
        })?;

    let index = |x: usize, y: usize| y * width + x;
    let mut adjacency: Vec<Vec<Edge<u32>>> = vec![Vec::new(); n];

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                adjacency[current].push(Edge::new(index(x - 1, y), 1));
            }
            if x + 1 < width {
                adjacency[current].push(Edge::new(index(x + 1, y), 1));
            }
            if y > 0 {
                adjacency[current].push(Edge::new(index(x, y - 1), 1));
            }
            if y + 1 < height {
                adjacency[current].push(Edge::new(index(x, y + 1), 1));
            }
        }
    }

    Ok(DirectedGraph::from_adjacency(adjacency))
}
