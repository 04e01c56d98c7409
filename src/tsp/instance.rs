//! Dense TSP instance extracted from a graph.
//!
//! Solvers never walk the adjacency lists directly: the graph is copied once
//! into a row-major weight matrix whose indices follow ascending vertex
//! order, so "smallest index" and "smallest vertex" are the same tie-break.

use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};

/// Row-major `n x n` weight matrix with a zero diagonal.
#[derive(Debug, Clone)]
pub(crate) struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
    symmetric: bool,
}

impl DistanceMatrix {
    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    /// Whether `w(i, j) == w(j, i)` for every pair. Reversal moves are only
    /// valid on symmetric matrices.
    pub(crate) fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Weight of the closed tour visiting `order` cyclically.
    pub(crate) fn tour_cost(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let closing = self.get(order[order.len() - 1], order[0]);
        order.windows(2).map(|w| self.get(w[0], w[1])).sum::<f64>() + closing
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[f64]]) -> Self {
        let n = rows.len();
        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let symmetric = (0..n).all(|i| (0..n).all(|j| data[i * n + j] == data[j * n + i]));
        Self { n, data, symmetric }
    }
}

/// A complete graph in solver form.
#[derive(Debug)]
pub(crate) struct TspInstance<'g, V> {
    /// Dense index → vertex, ascending.
    pub(crate) vertices: Vec<&'g V>,
    pub(crate) matrix: DistanceMatrix,
    /// Dense index of the start vertex.
    pub(crate) start: usize,
}

impl<'g, V: Vertex> TspInstance<'g, V> {
    /// Copies `graph` into a dense matrix.
    ///
    /// Fails with `VertexNotFound` for an unknown start and with
    /// `InvalidGraphForTsp` when any ordered pair lacks a direct edge.
    /// Self-loops are dropped.
    pub(crate) fn build(graph: &'g WeightedGraph<V>, start: &V) -> Result<Self> {
        let start_slot = graph
            .slot_index(start)
            .ok_or_else(|| GraphError::not_found(start))?;

        let mut ordered: Vec<(usize, &'g V)> =
            graph.live_slots().map(|(i, s)| (i, &s.id)).collect();
        ordered.sort_by(|a, b| a.1.cmp(b.1));

        let n = ordered.len();
        let mut dense = vec![usize::MAX; graph.slot_capacity()];
        for (k, &(slot, _)) in ordered.iter().enumerate() {
            dense[slot] = k;
        }

        let mut data = vec![f64::INFINITY; n * n];
        for k in 0..n {
            data[k * n + k] = 0.0;
        }
        for (slot, node) in graph.live_slots() {
            let i = dense[slot];
            for edge in &node.edges {
                let j = dense[edge.to];
                if i != j {
                    data[i * n + j] = edge.weight;
                }
            }
        }

        if let Some(missing) = data.iter().position(|w| w.is_infinite()) {
            let (i, j) = (missing / n, missing % n);
            return Err(GraphError::not_tsp(format!(
                "graph is not complete: no edge {:?} -> {:?}",
                ordered[i].1, ordered[j].1
            )));
        }

        let symmetric = (0..n).all(|i| (i + 1..n).all(|j| data[i * n + j] == data[j * n + i]));

        Ok(Self {
            start: dense[start_slot],
            vertices: ordered.into_iter().map(|(_, v)| v).collect(),
            matrix: DistanceMatrix { n, data, symmetric },
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Turns a cyclic order of dense indices into a closed vertex path
    /// starting and ending at the start vertex.
    pub(crate) fn closed_path(&self, order: &[usize]) -> Vec<V> {
        let n = order.len();
        let offset = order.iter().position(|&c| c == self.start).unwrap_or(0);
        let mut path: Vec<V> = (0..n)
            .map(|k| self.vertices[order[(offset + k) % n]].clone())
            .collect();
        path.push(self.vertices[self.start].clone());
        path
    }
}
