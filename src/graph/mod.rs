pub mod traits;
pub mod weight;
pub mod directed;
pub mod generators;
pub mod loader;

pub use traits::{Edge, WeightedGraph};
pub use weight::Weight;
pub use directed::{DirectedGraph, MAX_VERTICES};
