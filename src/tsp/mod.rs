//! Traveling-salesman solvers over complete [`WeightedGraph`]s.
//!
//! Three solvers, one per graph-size band, each trading optimality for time:
//!
//! | Band   | Solver                  | Vertices | Guarantee                    |
//! |--------|-------------------------|----------|------------------------------|
//! | Exact  | [`ExactTspSolver`]      | ≤ 12     | global optimum               |
//! | Medium | [`MediumTspHeuristic`]  | ≤ 400    | beats nearest neighbor       |
//! | Large  | [`LargeTspHeuristic`]   | larger   | fast polished greedy tour    |
//!
//! Every solver returns a closed path that starts and ends at the requested
//! vertex. Both heuristics enforce their own wall-clock budget.
//! [`solve_tsp`] picks the solver from the vertex count.

mod budget;
mod construct;
mod exact;
mod instance;
mod large;
mod local_search;
mod medium;
mod types;

pub use construct::nearest_neighbor_tour;
pub use exact::{ExactConfig, ExactTspSolver};
pub use large::{LargeConfig, LargeTspHeuristic};
pub use medium::{MediumConfig, MediumTspHeuristic};
pub use types::{TourResult, TourStats};

use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph};

/// Graph-size band, one per solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeBand {
    /// Held-Karp.
    Exact,
    /// Construction, local search and kicks.
    Medium,
    /// Nearest neighbor plus a short polish.
    Large,
}

impl SizeBand {
    /// Largest vertex count solved exactly.
    pub const EXACT_MAX: usize = 12;
    /// Largest vertex count given to the medium heuristic.
    pub const MEDIUM_MAX: usize = 400;

    pub fn for_vertex_count(n: usize) -> Self {
        if n <= Self::EXACT_MAX {
            SizeBand::Exact
        } else if n <= Self::MEDIUM_MAX {
            SizeBand::Medium
        } else {
            SizeBand::Large
        }
    }
}

/// Solves with the default solver for the graph's size band.
///
/// # Examples
///
/// ```
/// use u_tourgraph::graph::GraphGenerator;
/// use u_tourgraph::tsp::solve_tsp;
///
/// let g = GraphGenerator::new(30).with_seed(1).generate().unwrap();
/// let tour = solve_tsp(&g, &0).unwrap();
/// assert_eq!(tour.path.len(), 31);
/// assert_eq!(tour.path.first(), tour.path.last());
/// ```
pub fn solve_tsp<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<TourResult<V>> {
    let band = SizeBand::for_vertex_count(graph.vertex_count());
    tracing::debug!(?band, vertices = graph.vertex_count(), "dispatching tsp");
    match band {
        SizeBand::Exact => ExactTspSolver::solve(graph, start),
        SizeBand::Medium => MediumTspHeuristic::solve(graph, start),
        SizeBand::Large => LargeTspHeuristic::solve(graph, start),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::graph::{Vertex, WeightedGraph};
    use crate::random::create_rng;
    use rand::Rng;
    use std::collections::HashSet;

    /// The 4-vertex reference graph; optimal tour weight is 11.
    pub(crate) fn fixture() -> WeightedGraph<usize> {
        let mut g = WeightedGraph::undirected();
        for v in 0..4 {
            g.add_vertex(v).unwrap();
        }
        for (s, d, w) in [(0, 1, 1.0), (0, 2, 4.0), (0, 3, 5.0), (1, 2, 2.0), (1, 3, 3.0), (2, 3, 3.0)] {
            g.add_edge(&s, &d, w).unwrap();
        }
        g
    }

    /// Complete directed graph with independent weights in `1..50` each way.
    pub(crate) fn directed_complete(n: usize, seed: u64) -> WeightedGraph<usize> {
        let mut rng = create_rng(seed);
        let mut g = WeightedGraph::directed();
        for v in 0..n {
            g.add_vertex(v).unwrap();
        }
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    g.add_edge(&i, &j, f64::from(rng.random_range(1..50u32))).unwrap();
                }
            }
        }
        g
    }

    pub(crate) fn assert_valid_cycle<V: Vertex>(path: &[V], graph: &WeightedGraph<V>, start: &V) {
        let n = graph.vertex_count();
        assert_eq!(path.len(), n + 1, "path length");
        assert_eq!(path.first(), Some(start));
        assert_eq!(path.last(), Some(start));
        let distinct: HashSet<&V> = path[..n].iter().collect();
        assert_eq!(distinct.len(), n, "a vertex repeats");
        for w in path.windows(2) {
            if w[0] != w[1] {
                assert!(
                    graph.edge_weight(&w[0], &w[1]).is_finite(),
                    "missing edge {:?} -> {:?}",
                    w[0],
                    w[1]
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::fixture;
    use super::*;
    use crate::graph::GraphGenerator;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(SizeBand::for_vertex_count(1), SizeBand::Exact);
        assert_eq!(SizeBand::for_vertex_count(12), SizeBand::Exact);
        assert_eq!(SizeBand::for_vertex_count(13), SizeBand::Medium);
        assert_eq!(SizeBand::for_vertex_count(400), SizeBand::Medium);
        assert_eq!(SizeBand::for_vertex_count(401), SizeBand::Large);
    }

    #[test]
    fn test_dispatch_uses_exact_for_fixture() {
        let result = solve_tsp(&fixture(), &0).unwrap();
        assert_eq!(result.path, vec![0, 1, 2, 3, 0]);
        assert_eq!(result.stats.kicks, 0);
    }

    #[test]
    fn test_dispatch_medium() {
        let g = GraphGenerator::new(40).with_seed(2).generate().unwrap();
        let result = solve_tsp(&g, &0).unwrap();
        assert_eq!(result.path.len(), 41);
        assert!(result.stats.kicks > 0);
    }
}
