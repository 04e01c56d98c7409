//! Weighted graphs with shortest-path and traveling-salesman solvers.
//!
//! - **Graph**: [`WeightedGraph`](graph::WeightedGraph), a directed or
//!   undirected adjacency structure over any [`Vertex`](graph::Vertex) type,
//!   plus a seeded random generator and a serializable snapshot.
//! - **Shortest paths**: Dijkstra with deterministic tie-breaking and an
//!   explicit [`Route::NotReachable`](path::Route::NotReachable) result.
//! - **TSP**: an exact Held-Karp solver for small graphs and two
//!   time-budgeted heuristics for a few hundred and around a thousand
//!   vertices, selected by [`solve_tsp`](tsp::solve_tsp).
//!
//! All solvers are synchronous and read the graph without mutating it.
//! Structural problems are reported as [`GraphError`] before any search
//! starts. Progress is reported through `tracing` events; install a
//! subscriber to see them.
//!
//! # Features
//!
//! - `serde`: serialization for snapshots, configs and results, plus JSON
//!   helpers on [`GraphSnapshot`](graph::GraphSnapshot).
//! - `parallel`: runs the medium heuristic's search chains on rayon.

pub mod error;
pub mod graph;
pub mod path;
mod random;
pub mod tsp;

pub use error::{GraphError, Result};
