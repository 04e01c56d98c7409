//! Weighted graph data structure.
//!
//! [`WeightedGraph`] is the structure every solver reads. It is built once
//! through vertex/edge insertion (or [`GraphGenerator`]), handed read-only to
//! a solver, and may be mutated between solver calls.

mod generate;
mod snapshot;
mod types;
mod weighted;

pub use generate::GraphGenerator;
pub use snapshot::GraphSnapshot;
pub use types::Vertex;
pub use weighted::WeightedGraph;
