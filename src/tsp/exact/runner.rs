//! Held-Karp dynamic program.
//!
//! The table is filled backwards: `h[mask][k]` is the cheapest way to
//! finish the cycle from city `k` once exactly the cities in `mask` have
//! been visited (`k` included). Walking forward from the start and always
//! taking the smallest city that still reaches the optimum then yields the
//! lexicographically smallest optimal tour.

use super::config::ExactConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::tsp::instance::{DistanceMatrix, TspInstance};
use crate::tsp::types::{TourResult, TourStats};
use std::time::Instant;

/// Optimal solver for small complete graphs.
///
/// # Examples
///
/// ```
/// use u_tourgraph::graph::WeightedGraph;
/// use u_tourgraph::tsp::ExactTspSolver;
///
/// let mut g = WeightedGraph::undirected();
/// for v in 0..4 {
///     g.add_vertex(v).unwrap();
/// }
/// for (a, b, w) in [(0, 1, 1.0), (0, 2, 4.0), (0, 3, 5.0), (1, 2, 2.0), (1, 3, 3.0), (2, 3, 3.0)] {
///     g.add_edge(&a, &b, w).unwrap();
/// }
///
/// let (cost, path) = ExactTspSolver::solve(&g, &0).unwrap().into_tuple();
/// assert_eq!(cost, 11.0);
/// assert_eq!(path, vec![0, 1, 2, 3, 0]);
/// ```
pub struct ExactTspSolver;

impl ExactTspSolver {
    /// Solves with [`ExactConfig::default`].
    pub fn solve<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<TourResult<V>> {
        Self::solve_with_config(graph, start, &ExactConfig::default())
    }

    /// Returns the minimum-weight Hamiltonian cycle from `start`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if `config` does not validate.
    /// - `VertexNotFound` if `start` is not in the graph.
    /// - `TooManyVertices` above `config.max_vertices`.
    /// - `InvalidGraphForTsp` if the graph is not complete.
    #[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), start = ?start))]
    pub fn solve_with_config<V: Vertex>(
        graph: &WeightedGraph<V>,
        start: &V,
        config: &ExactConfig,
    ) -> Result<TourResult<V>> {
        let started = Instant::now();
        config.validate().map_err(GraphError::InvalidConfig)?;

        if !graph.contains_vertex(start) {
            return Err(GraphError::not_found(start));
        }
        let n = graph.vertex_count();
        if n > config.max_vertices {
            return Err(GraphError::TooManyVertices {
                vertices: n,
                limit: config.max_vertices,
            });
        }

        let instance = TspInstance::build(graph, start)?;
        let order = held_karp(&instance.matrix, instance.start, config.tie_epsilon);
        let cost = instance.matrix.tour_cost(&order);

        let elapsed = started.elapsed();
        tracing::debug!(cost, elapsed_us = elapsed.as_micros() as u64, "exact tour ready");

        Ok(TourResult {
            cost,
            path: instance.closed_path(&order),
            stats: TourStats {
                construction_cost: cost,
                elapsed,
                ..TourStats::default()
            },
        })
    }
}

/// Optimal cyclic order starting at `start`.
fn held_karp(m: &DistanceMatrix, start: usize, eps: f64) -> Vec<usize> {
    let others: Vec<usize> = (0..m.len()).filter(|&c| c != start).collect();
    let k = others.len();
    if k == 0 {
        return vec![start];
    }

    let full = (1usize << k) - 1;
    let mut h = vec![f64::INFINITY; (full + 1) * k];
    let at = |mask: usize, last: usize| mask * k + last;

    for (last, &city) in others.iter().enumerate() {
        h[at(full, last)] = m.get(city, start);
    }

    for mask in (1..full).rev() {
        for last in 0..k {
            if mask & (1 << last) == 0 {
                continue;
            }
            let from = others[last];
            let mut best = f64::INFINITY;
            for next in 0..k {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let c = m.get(from, others[next]) + h[at(mask | (1 << next), next)];
                if c < best {
                    best = c;
                }
            }
            h[at(mask, last)] = best;
        }
    }

    let mut order = Vec::with_capacity(k + 1);
    order.push(start);
    let mut from = start;
    let mut mask = 0usize;
    while mask != full {
        let mut candidates = (0..k)
            .filter(|&next| mask & (1 << next) == 0)
            .map(|next| (next, m.get(from, others[next]) + h[at(mask | (1 << next), next)]));
        let best = candidates.clone().map(|(_, c)| c).fold(f64::INFINITY, f64::min);
        let Some((next, _)) = candidates.find(|&(_, c)| c <= best + eps) else {
            break;
        };
        mask |= 1 << next;
        from = others[next];
        order.push(from);
    }
    order
}
