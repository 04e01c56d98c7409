//! Shortest paths (Dijkstra).
//!
//! # References
//!
//! - Dijkstra, E. W. (1959), "A note on two problems in connexion with graphs"

mod dijkstra;
mod types;

pub use dijkstra::ShortestPath;
pub use types::Route;
