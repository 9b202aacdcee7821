pub mod traits;
pub mod engine;
pub mod reconstruct;
pub mod batch;

pub use traits::{Route, SearchStats, ShortestPathAlgorithm, ShortestPathTree, VertexState};
