//! Exact TSP solver for small complete graphs.
//!
//! # References
//!
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing Problems"
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::ExactConfig;
pub use runner::ExactTspSolver;
