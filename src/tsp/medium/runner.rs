//! Medium-band TSP heuristic execution.
//!
//! # Algorithm
//!
//! 1. Build the cheaper of a nearest-neighbor and a greedy-edge tour
//!    (greedy-edge only for symmetric weights). A complete tour exists
//!    before any improvement is attempted.
//! 2. Descend to a 2-opt / Or-opt local optimum.
//! 3. Iterated local search: a windowed double-bridge kick, a local
//!    re-optimization of the touched cities, keep the tour if it is cheaper,
//!    otherwise roll back. Stops after `max_kicks` or at the deadline.

use super::config::MediumConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::random::create_rng;
use crate::tsp::budget::Deadline;
use crate::tsp::construct::{greedy_edge, nearest_neighbor};
use crate::tsp::instance::{DistanceMatrix, TspInstance};
use crate::tsp::local_search::{double_bridge, LocalSearch, NeighborLists, Tour, WorkQueue};
use crate::tsp::types::{TourResult, TourStats};
use std::time::Instant;

/// Kicks need room for three distinct cut points plus untouched cities.
const MIN_KICK_SIZE: usize = 8;

/// Constructive + local-search heuristic for mid-size complete graphs
/// (around 300 vertices).
pub struct MediumTspHeuristic;

impl MediumTspHeuristic {
    /// Solves with [`MediumConfig::default`].
    pub fn solve<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<TourResult<V>> {
        Self::solve_with_config(graph, start, &MediumConfig::default())
    }

    /// Returns a Hamiltonian cycle from `start` within `config.time_limit_ms`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig`, `VertexNotFound` for an unknown start, and
    /// `InvalidGraphForTsp` for an incomplete graph, all before any search.
    #[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), start = ?start))]
    pub fn solve_with_config<V: Vertex>(
        graph: &WeightedGraph<V>,
        start: &V,
        config: &MediumConfig,
    ) -> Result<TourResult<V>> {
        let started = Instant::now();
        config.validate().map_err(GraphError::InvalidConfig)?;
        let deadline = Deadline::after(started, config.time_limit_ms);

        let instance = TspInstance::build(graph, start)?;
        let m = &instance.matrix;

        let mut initial = nearest_neighbor(m, instance.start);
        let mut construction_cost = m.tour_cost(&initial);
        if m.is_symmetric() && instance.len() >= 3 {
            let greedy = greedy_edge(m);
            let greedy_cost = m.tour_cost(&greedy);
            tracing::trace!(
                nearest_neighbor = construction_cost,
                greedy_edge = greedy_cost,
                "initial tours"
            );
            if greedy_cost < construction_cost {
                initial = greedy;
                construction_cost = greedy_cost;
            }
        }

        let neighbors = NeighborLists::build(m, config.neighbor_count);
        let search = LocalSearch::new(m, &neighbors, config.max_segment);

        let mut tour = Tour::new(initial);
        let mut queue = WorkQueue::with_all(&tour);
        let descent = search.optimize(&mut tour, &mut queue, &deadline);

        let mut stats = TourStats {
            construction_cost,
            improving_moves: descent.moves,
            budget_exhausted: descent.interrupted,
            ..TourStats::default()
        };

        if instance.len() >= MIN_KICK_SIZE && config.max_kicks > 0 && !descent.interrupted {
            let cost = m.tour_cost(tour.order());
            let seed = config.seed.unwrap_or(42);
            let outcomes = run_chains(&search, m, &tour, cost, config, seed, &deadline);

            let mut best: Option<ChainOutcome> = None;
            for outcome in outcomes {
                stats.improving_moves += outcome.moves;
                stats.kicks += outcome.kicks;
                stats.budget_exhausted |= outcome.interrupted;
                if best.as_ref().is_none_or(|b| outcome.cost < b.cost) {
                    best = Some(outcome);
                }
            }
            if let Some(best) = best {
                tour = best.tour;
            }
        }

        let cost = m.tour_cost(tour.order());
        stats.elapsed = deadline.elapsed();
        tracing::debug!(
            cost,
            construction_cost = stats.construction_cost,
            moves = stats.improving_moves,
            kicks = stats.kicks,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            budget_exhausted = stats.budget_exhausted,
            "medium tour ready"
        );

        Ok(TourResult {
            cost,
            path: instance.closed_path(tour.order()),
            stats,
        })
    }
}

/// Result of one iterated-local-search chain.
struct ChainOutcome {
    tour: Tour,
    cost: f64,
    moves: usize,
    kicks: usize,
    interrupted: bool,
}

fn run_chains(
    search: &LocalSearch<'_>,
    m: &DistanceMatrix,
    tour: &Tour,
    cost: f64,
    config: &MediumConfig,
    seed: u64,
    deadline: &Deadline,
) -> Vec<ChainOutcome> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.chains > 1 {
            return (0..config.chains)
                .into_par_iter()
                .map(|k| run_chain(search, m, tour, cost, config, seed.wrapping_add(k as u64), deadline))
                .collect();
        }
    }

    (0..config.chains)
        .map(|k| run_chain(search, m, tour, cost, config, seed.wrapping_add(k as u64), deadline))
        .collect()
}

fn run_chain(
    search: &LocalSearch<'_>,
    m: &DistanceMatrix,
    tour: &Tour,
    cost: f64,
    config: &MediumConfig,
    seed: u64,
    deadline: &Deadline,
) -> ChainOutcome {
    let mut rng = create_rng(seed);
    let mut best = tour.clone();
    let mut best_cost = cost;
    let mut current = tour.clone();
    let mut current_cost = cost;
    let mut queue = WorkQueue::new(tour.len());

    let mut moves = 0;
    let mut kicks = 0;
    let mut interrupted = false;

    for _ in 0..config.max_kicks {
        if deadline.expired() {
            interrupted = true;
            break;
        }

        let (delta, touched) = double_bridge(&mut current, m, config.kick_window, &mut rng);
        current_cost += delta;
        for c in touched {
            queue.push(c);
        }
        let step = search.optimize(&mut current, &mut queue, deadline);
        current_cost -= step.gain;
        moves += step.moves;
        kicks += 1;

        if current_cost < best_cost - 1e-9 {
            best.clone_from(&current);
            best_cost = current_cost;
        } else {
            current.clone_from(&best);
            current_cost = best_cost;
        }

        if step.interrupted {
            interrupted = true;
            break;
        }
    }

    ChainOutcome {
        cost: m.tour_cost(best.order()),
        tour: best,
        moves,
        kicks,
        interrupted,
    }
}
