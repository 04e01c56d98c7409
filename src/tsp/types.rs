//! TSP result types.

use std::time::Duration;

/// A Hamiltonian cycle returned by any TSP solver.
///
/// `path` starts and ends at the requested start vertex, so its length is
/// the vertex count plus one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourResult<V> {
    /// Total weight of the cycle.
    pub cost: f64,

    /// Closed vertex sequence.
    pub path: Vec<V>,

    /// Search statistics.
    pub stats: TourStats,
}

impl<V> TourResult<V> {
    /// `(total_weight, path)`.
    pub fn into_tuple(self) -> (f64, Vec<V>) {
        (self.cost, self.path)
    }
}

/// Statistics collected while solving.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourStats {
    /// Cost of the constructed tour before improvement. Equals the final
    /// cost for the exact solver.
    pub construction_cost: f64,

    /// Number of improving local-search moves applied.
    pub improving_moves: usize,

    /// Number of perturbation kicks tried.
    pub kicks: usize,

    /// Wall-clock time spent in the call.
    pub elapsed: Duration,

    /// Whether the time budget cut the search short.
    pub budget_exhausted: bool,
}
