//! Seeded random graph generation.
//!
//! Benchmarks are driven by complete graphs over `0..nodes` with independent
//! uniform integer weights. The same seed always yields the same graph.

use super::weighted::WeightedGraph;
use crate::error::{GraphError, Result};
use crate::random::create_rng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Builder for random undirected test graphs.
///
/// # Examples
///
/// ```
/// use u_tourgraph::graph::GraphGenerator;
///
/// let g = GraphGenerator::new(300)
///     .with_weight_bounds(1, 100)
///     .with_seed(42)
///     .generate()
///     .unwrap();
/// assert_eq!(g.vertex_count(), 300);
/// assert!(g.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    /// Number of vertices, labelled `0..nodes`.
    pub nodes: usize,

    /// Inclusive weight range `(lo, hi)`.
    pub weight_bounds: (u32, u32),

    /// `None` builds a complete graph; `Some(k)` caps every vertex at
    /// `k` incident edges.
    pub edges_per_vertex: Option<usize>,

    /// Random seed. `None` uses 42.
    pub seed: Option<u64>,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self {
            nodes: 10,
            weight_bounds: (1, 600),
            edges_per_vertex: None,
            seed: None,
        }
    }
}

impl GraphGenerator {
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    pub fn with_weight_bounds(mut self, lo: u32, hi: u32) -> Self {
        self.weight_bounds = (lo, hi);
        self
    }

    pub fn with_edges_per_vertex(mut self, k: usize) -> Self {
        self.edges_per_vertex = Some(k);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.nodes == 0 {
            return Err("nodes must be positive".into());
        }
        let (lo, hi) = self.weight_bounds;
        if lo > hi {
            return Err(format!("weight bounds must satisfy lo <= hi, got ({lo}, {hi})"));
        }
        if let Some(k) = self.edges_per_vertex {
            if k >= self.nodes {
                return Err(format!(
                    "edges_per_vertex must be less than nodes ({k} >= {})",
                    self.nodes
                ));
            }
        }
        Ok(())
    }

    /// Builds the graph.
    pub fn generate(&self) -> Result<WeightedGraph<usize>> {
        self.validate().map_err(GraphError::InvalidConfig)?;

        let mut rng = create_rng(self.seed.unwrap_or(42));
        let (lo, hi) = self.weight_bounds;
        let mut graph = WeightedGraph::undirected();
        for v in 0..self.nodes {
            graph.add_vertex(v)?;
        }

        match self.edges_per_vertex {
            None => {
                for i in 0..self.nodes {
                    for j in i + 1..self.nodes {
                        let weight = rng.random_range(lo..=hi);
                        graph.add_edge(&i, &j, f64::from(weight))?;
                    }
                }
            }
            Some(k) => {
                let mut degree = vec![0usize; self.nodes];
                for i in 0..self.nodes {
                    // Candidates are drawn without replacement, so the loop
                    // is bounded by the vertex count.
                    let mut candidates: Vec<usize> = (0..self.nodes)
                        .filter(|&j| j != i && graph.edge_weight(&i, &j).is_infinite())
                        .collect();
                    candidates.shuffle(&mut rng);
                    for j in candidates.into_iter().take(k) {
                        let weight = rng.random_range(lo..=hi);
                        if degree[i] < k && degree[j] < k {
                            graph.add_edge(&i, &j, f64::from(weight))?;
                            degree[i] += 1;
                            degree[j] += 1;
                        }
                    }
                }
            }
        }

        tracing::debug!(
            nodes = self.nodes,
            edges = graph.edge_count(),
            "generated graph"
        );
        Ok(graph)
    }
}
