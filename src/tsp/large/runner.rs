//! Large-band TSP heuristic execution.

use super::config::LargeConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::tsp::budget::Deadline;
use crate::tsp::construct::nearest_neighbor;
use crate::tsp::instance::TspInstance;
use crate::tsp::local_search::{LocalSearch, NeighborLists, Tour, WorkQueue};
use crate::tsp::types::{TourResult, TourStats};
use std::time::Instant;

/// Greedy heuristic for large complete graphs (around 1000 vertices).
///
/// Builds a nearest-neighbor tour in `O(n²)` and polishes it with one
/// bounded neighbor-list 2-opt / Or-opt pass. No perturbation.
pub struct LargeTspHeuristic;

impl LargeTspHeuristic {
    /// Solves with [`LargeConfig::default`].
    pub fn solve<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<TourResult<V>> {
        Self::solve_with_config(graph, start, &LargeConfig::default())
    }

    /// Returns a Hamiltonian cycle from `start`.
    ///
    /// # Errors
    ///
    /// Same as [`MediumTspHeuristic`](crate::tsp::MediumTspHeuristic).
    #[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), start = ?start))]
    pub fn solve_with_config<V: Vertex>(
        graph: &WeightedGraph<V>,
        start: &V,
        config: &LargeConfig,
    ) -> Result<TourResult<V>> {
        let started = Instant::now();
        config.validate().map_err(GraphError::InvalidConfig)?;
        let deadline = Deadline::after(started, config.time_limit_ms);

        let instance = TspInstance::build(graph, start)?;
        let m = &instance.matrix;

        let order = nearest_neighbor(m, instance.start);
        let construction_cost = m.tour_cost(&order);
        let mut tour = Tour::new(order);
        let mut stats = TourStats {
            construction_cost,
            ..TourStats::default()
        };

        if config.polish_ms > 0 {
            let polish = deadline.tightened(config.polish_ms);
            let neighbors = NeighborLists::build(m, config.neighbor_count);
            let search = LocalSearch::new(m, &neighbors, config.max_segment);
            let mut queue = WorkQueue::with_all(&tour);
            let outcome = search.optimize(&mut tour, &mut queue, &polish);
            stats.improving_moves = outcome.moves;
            stats.budget_exhausted = outcome.interrupted;
        }

        let cost = m.tour_cost(tour.order());
        stats.elapsed = deadline.elapsed();
        tracing::debug!(
            cost,
            construction_cost,
            moves = stats.improving_moves,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            budget_exhausted = stats.budget_exhausted,
            "large tour ready"
        );

        Ok(TourResult {
            cost,
            path: instance.closed_path(tour.order()),
            stats,
        })
    }
}
