//! Large-band TSP heuristic (around a thousand vertices).
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An analysis of several heuristics
//!   for the traveling salesman problem"

mod config;
mod runner;

pub use config::LargeConfig;
pub use runner::LargeTspHeuristic;
