//! Dijkstra's algorithm over a [`WeightedGraph`].
//!
//! The frontier is a min-heap keyed by tentative distance, ties broken by
//! the smallest vertex identifier so results are deterministic. A point
//! query stops as soon as the target is settled.

use super::types::Route;
use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by (distance, vertex id).
#[derive(Debug)]
struct Frontier<'g, V> {
    cost: f64,
    vertex: &'g V,
    slot: usize,
}

impl<V: Ord> PartialEq for Frontier<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for Frontier<'_, V> {}

impl<V: Ord> PartialOrd for Frontier<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for Frontier<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(other.vertex))
    }
}

/// Tentative distances and predecessors, indexed by slot.
struct Labels {
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
}

/// Single-source shortest paths.
///
/// Weights are non-negative by construction of [`WeightedGraph`].
pub struct ShortestPath;

impl ShortestPath {
    /// Minimum-weight path from `start` to `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tourgraph::graph::WeightedGraph;
    /// use u_tourgraph::path::ShortestPath;
    ///
    /// let mut g = WeightedGraph::undirected();
    /// for v in 0..3u32 {
    ///     g.add_vertex(v).unwrap();
    /// }
    /// g.add_edge(&0, &1, 1.0).unwrap();
    /// g.add_edge(&1, &2, 2.0).unwrap();
    /// g.add_edge(&0, &2, 4.0).unwrap();
    ///
    /// let route = ShortestPath::find(&g, &0, &2).unwrap();
    /// assert_eq!(route.into_tuple(), (3.0, vec![0, 1, 2]));
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(start = ?start, end = ?end))]
    pub fn find<V: Vertex>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<Route<V>> {
        let s = graph
            .slot_index(start)
            .ok_or_else(|| GraphError::not_found(start))?;
        let t = graph
            .slot_index(end)
            .ok_or_else(|| GraphError::not_found(end))?;

        if s == t {
            return Ok(Route::Found {
                distance: 0.0,
                path: vec![start.clone()],
            });
        }

        let labels = run(graph, s, Some(t));
        if labels.dist[t].is_infinite() {
            tracing::debug!("target not reachable");
            return Ok(Route::NotReachable);
        }

        let mut path = Vec::new();
        let mut cursor = Some(t);
        while let Some(slot) = cursor {
            if let Some(id) = graph.id_at(slot) {
                path.push(id.clone());
            }
            cursor = labels.prev[slot];
        }
        path.reverse();

        Ok(Route::Found {
            distance: labels.dist[t],
            path,
        })
    }

    /// Distances from `start` to every reachable vertex, in vertex
    /// insertion order.
    pub fn distances<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<Vec<(V, f64)>> {
        let s = graph
            .slot_index(start)
            .ok_or_else(|| GraphError::not_found(start))?;
        let labels = run(graph, s, None);
        Ok(graph
            .live_slots()
            .filter(|&(i, _)| labels.dist[i].is_finite())
            .map(|(i, slot)| (slot.id.clone(), labels.dist[i]))
            .collect())
    }
}

fn run<V: Vertex>(graph: &WeightedGraph<V>, source: usize, target: Option<usize>) -> Labels {
    let cap = graph.slot_capacity();
    let mut dist = vec![f64::INFINITY; cap];
    let mut prev = vec![None; cap];
    let mut settled = vec![false; cap];
    let mut heap = BinaryHeap::new();

    if let Some(id) = graph.id_at(source) {
        dist[source] = 0.0;
        heap.push(Reverse(Frontier {
            cost: 0.0,
            vertex: id,
            slot: source,
        }));
    }

    while let Some(Reverse(Frontier { cost, slot, .. })) = heap.pop() {
        if settled[slot] {
            continue;
        }
        settled[slot] = true;
        if Some(slot) == target {
            break;
        }

        let Some(node) = graph.slot(slot) else {
            continue;
        };
        for edge in &node.edges {
            if settled[edge.to] {
                continue;
            }
            let candidate = cost + edge.weight;
            if candidate < dist[edge.to] {
                dist[edge.to] = candidate;
                prev[edge.to] = Some(slot);
                if let Some(id) = graph.id_at(edge.to) {
                    heap.push(Reverse(Frontier {
                        cost: candidate,
                        vertex: id,
                        slot: edge.to,
                    }));
                }
            }
        }
    }

    Labels { dist, prev }
}
