//! Constructive tour heuristics.
//!
//! Both return a cyclic order of dense indices covering every vertex once.

use super::instance::{DistanceMatrix, TspInstance};
use super::types::{TourResult, TourStats};
use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph};
use std::time::Instant;

/// Nearest-neighbor tour from `start`. Ties go to the smallest index.
pub(crate) fn nearest_neighbor(m: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = m.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    let mut current = start;
    visited[current] = true;
    order.push(current);

    for _ in 1..n {
        let mut best_next = usize::MAX;
        let mut best_cost = f64::INFINITY;
        for (j, &seen) in visited.iter().enumerate() {
            if !seen {
                let c = m.get(current, j);
                if c < best_cost {
                    best_cost = c;
                    best_next = j;
                }
            }
        }
        visited[best_next] = true;
        order.push(best_next);
        current = best_next;
    }

    order
}

/// Greedy-edge (greedy matching) construction for symmetric matrices.
///
/// Edges are taken cheapest first (ties by index) as long as no vertex
/// exceeds degree two and no premature cycle closes; the resulting
/// Hamiltonian path is closed into a tour.
pub(crate) fn greedy_edge(m: &DistanceMatrix) -> Vec<usize> {
    let n = m.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut edges: Vec<(f64, u32, u32)> = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            edges.push((m.get(i, j), i as u32, j as u32));
        }
    }
    edges.sort_unstable_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut parent: Vec<usize> = (0..n).collect();
    let mut degree = vec![0u8; n];
    let mut adj = vec![[usize::MAX; 2]; n];
    let mut taken = 0;

    for &(_, i, j) in &edges {
        if taken == n - 1 {
            break;
        }
        let (i, j) = (i as usize, j as usize);
        if degree[i] >= 2 || degree[j] >= 2 {
            continue;
        }
        let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
        if ri == rj {
            continue;
        }
        parent[ri] = rj;
        adj[i][degree[i] as usize] = j;
        adj[j][degree[j] as usize] = i;
        degree[i] += 1;
        degree[j] += 1;
        taken += 1;
    }

    // Walk the path from one of its two endpoints.
    let Some(head) = (0..n).find(|&v| degree[v] < 2) else {
        return (0..n).collect();
    };
    let mut order = Vec::with_capacity(n);
    let mut prev = usize::MAX;
    let mut current = head;
    loop {
        order.push(current);
        let next = adj[current]
            .iter()
            .copied()
            .find(|&v| v != usize::MAX && v != prev);
        match next {
            Some(v) if order.len() < n => {
                prev = current;
                current = v;
            }
            _ => break,
        }
    }
    order
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// The plain nearest-neighbor tour on `graph` from `start`.
///
/// This is the greedy baseline the medium heuristic is measured against.
pub fn nearest_neighbor_tour<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<TourResult<V>> {
    let started = Instant::now();
    let instance = TspInstance::build(graph, start)?;
    let order = nearest_neighbor(&instance.matrix, instance.start);
    let cost = instance.matrix.tour_cost(&order);
    Ok(TourResult {
        cost,
        path: instance.closed_path(&order),
        stats: TourStats {
            construction_cost: cost,
            elapsed: started.elapsed(),
            ..TourStats::default()
        },
    })
}
