use log::{debug, trace};

use crate::algorithm::{Route, SearchStats, ShortestPathAlgorithm, ShortestPathTree, VertexState};
use crate::data_structures::{FrontierQueue, IndexedFrontier, LazyFrontier, LinearScanFrontier};
use crate::graph::{Weight, WeightedGraph};
use crate::{Error, Result};

/// Which frontier queue drives the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierStrategy {
    /// Binary heap with a slot index and true decrease-key
    #[default]
    Indexed,
    /// Binary heap with lazy deletion of superseded entries
    Lazy,
    /// O(V) scan per extraction
    LinearScan,
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Frontier implementation
    pub strategy: FrontierStrategy,
    /// Stop as soon as the sink is finalized
    pub early_exit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            strategy: FrontierStrategy::Indexed,
            early_exit: true,
        }
    }
}

/// Dijkstra's relaxation loop over a pluggable frontier
///
/// Every query owns its tables and queue, so one engine and one graph can serve any
/// number of queries, concurrently or not.
#[derive(Debug, Clone, Default)]
pub struct PathEngine {
    config: EngineConfig,
}

impl PathEngine {
    /// Creates a new engine with the default configuration
    pub fn new() -> Self {
        PathEngine {
            config: EngineConfig::default(),
        }
    }

    /// Replaces the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the frontier implementation
    pub fn with_strategy(mut self, strategy: FrontierStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Enable or disable stopping once the sink is finalized
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.config.early_exit = enabled;
        self
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Ordered vertex sequence from `source` to `sink`, empty when no path exists
    pub fn shortest_path<W, G>(&self, graph: &G, source: usize, sink: usize) -> Result<Vec<usize>>
    where
        W: Weight,
        G: WeightedGraph<W>,
    {
        let tree = self.search(graph, source, Some(sink))?;
        Ok(tree.path_to(sink))
    }

    /// Path and total cost from `source` to `sink`, `None` when no path exists
    pub fn route<W, G>(&self, graph: &G, source: usize, sink: usize) -> Result<Option<Route<W>>>
    where
        W: Weight,
        G: WeightedGraph<W>,
    {
        let tree = self.search(graph, source, Some(sink))?;
        Ok(tree.route_to(sink))
    }

    /// Runs the search from `source`, stopping at `sink` when one is given
    ///
    /// Endpoints and the graph are validated before anything is allocated. With no
    /// sink, or with early exit disabled, every reachable vertex is finalized.
    pub fn search<W, G>(
        &self,
        graph: &G,
        source: usize,
        sink: Option<usize>,
    ) -> Result<ShortestPathTree<W>>
    where
        W: Weight,
        G: WeightedGraph<W>,
    {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }
        if let Some(target) = sink {
            if target >= n {
                return Err(Error::InvalidVertex(target));
            }
        }
        graph.validate()?;

        match self.config.strategy {
            FrontierStrategy::Indexed => {
                self.relax_all(graph, source, sink, IndexedFrontier::with_capacity(n))
            }
            FrontierStrategy::Lazy => {
                self.relax_all(graph, source, sink, LazyFrontier::with_capacity(n))
            }
            FrontierStrategy::LinearScan => {
                self.relax_all(graph, source, sink, LinearScanFrontier::with_capacity(n))
            }
        }
    }

    fn relax_all<W, G, Q>(
        &self,
        graph: &G,
        source: usize,
        sink: Option<usize>,
        mut queue: Q,
    ) -> Result<ShortestPathTree<W>>
    where
        W: Weight,
        G: WeightedGraph<W>,
        Q: FrontierQueue<W>,
    {
        let n = graph.vertex_count();
        debug!(
            "Searching from {} to {:?} over {} vertices ({:?} frontier)",
            source, sink, n, self.config.strategy
        );

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut states = vec![VertexState::Unvisited; n];
        let mut finalization_order = Vec::new();
        let mut stats = SearchStats::default();
        // First tail whose relaxation into a vertex overflowed W
        let mut overflowed: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());
        states[source] = VertexState::Frontier;
        queue.insert(source, W::zero())?;

        while !queue.is_empty() {
            let (u, dist_u) = queue.extract_min()?;
            stats.extractions += 1;
            if states[u] == VertexState::Finalized {
                continue;
            }

            states[u] = VertexState::Finalized;
            finalization_order.push((u, dist_u));
            trace!("Finalized {} at {:?}", u, dist_u);

            if self.config.early_exit && sink == Some(u) {
                break;
            }

            for edge in graph.neighbors(u)? {
                let v = edge.to;
                stats.relaxations += 1;
                if states[v] == VertexState::Finalized {
                    continue;
                }

                let candidate = match dist_u.checked_add(edge.weight) {
                    Some(candidate) => candidate,
                    None => {
                        // Beyond every representable distance, so never an improvement.
                        trace!("Relaxation {} -> {} overflows", u, v);
                        if distances[v].is_none() && overflowed[v].is_none() {
                            overflowed[v] = Some(u);
                        }
                        continue;
                    }
                };
                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    if states[v] == VertexState::Unvisited {
                        states[v] = VertexState::Frontier;
                        queue.insert(v, candidate)?;
                    } else {
                        queue.decrease(v, candidate)?;
                        stats.decrease_keys += 1;
                    }
                }
            }
        }

        stats.stale_skipped = queue.stale_discarded();
        if let Some((from, to)) = blocking_overflow::<W, G>(graph, &states, &overflowed, sink)? {
            return Err(Error::DistanceOverflow { from, to });
        }
        debug!(
            "Search from {} finalized {} vertices: {:?}",
            source,
            finalization_order.len(),
            stats
        );

        Ok(ShortestPathTree {
            distances,
            predecessors,
            states,
            finalization_order,
            source,
            sink,
            stats,
        })
    }
}

/// Finds an overflowed relaxation that leaves a requested vertex without a distance
///
/// With a sink, only vertices from which the unsettled sink can still be reached
/// matter. Without one, every vertex counts.
fn blocking_overflow<W, G>(
    graph: &G,
    states: &[VertexState],
    overflowed: &[Option<usize>],
    sink: Option<usize>,
) -> Result<Option<(usize, usize)>>
where
    W: Weight,
    G: WeightedGraph<W>,
{
    // Only vertices that never received a representable distance stay unvisited.
    let unsettled: Vec<(usize, usize)> = overflowed
        .iter()
        .enumerate()
        .filter(|&(v, _)| states[v] == VertexState::Unvisited)
        .filter_map(|(v, from)| from.map(|from| (from, v)))
        .collect();
    if unsettled.is_empty() {
        return Ok(None);
    }

    let target = match sink {
        None => return Ok(unsettled.first().copied()),
        Some(target) if states[target] == VertexState::Finalized => return Ok(None),
        Some(target) => target,
    };

    // Multi-source walk from the unsettled vertices, remembering which edge seeded it.
    let mut origin: Vec<Option<(usize, usize)>> = vec![None; states.len()];
    let mut stack = Vec::with_capacity(unsettled.len());
    for &(from, v) in &unsettled {
        origin[v] = Some((from, v));
        stack.push(v);
    }
    while let Some(v) = stack.pop() {
        if v == target {
            return Ok(origin[v]);
        }
        for edge in graph.neighbors(v)? {
            if origin[edge.to].is_none() {
                origin[edge.to] = origin[v];
                stack.push(edge.to);
            }
        }
    }

    Ok(None)
}

impl<W, G> ShortestPathAlgorithm<W, G> for PathEngine
where
    W: Weight,
    G: WeightedGraph<W>,
{
    fn name(&self) -> &'static str {
        match self.config.strategy {
            FrontierStrategy::Indexed => "Dijkstra (indexed heap)",
            FrontierStrategy::Lazy => "Dijkstra (lazy heap)",
            FrontierStrategy::LinearScan => "Dijkstra (linear scan)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathTree<W>> {
        self.search(graph, source, None)
    }
}
