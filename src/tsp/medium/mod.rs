//! Medium-band TSP heuristic (a few hundred vertices).
//!
//! Greedy construction, neighbor-list 2-opt / Or-opt descent, then
//! iterated local search with windowed double-bridge kicks until the kick
//! budget or the deadline is reached.
//!
//! # References
//!
//! - Johnson & McGeoch (1997), "The Traveling Salesman Problem: A Case Study
//!   in Local Optimization"
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search"

mod config;
mod runner;

pub use config::MediumConfig;
pub use runner::MediumTspHeuristic;
