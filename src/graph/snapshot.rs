//! Plain-data snapshot of a graph for fixtures.
//!
//! A snapshot keeps the vertex order, every stored edge direction in
//! neighbor order, the weights and the `directed` flag, so restoring it
//! reproduces the original graph exactly (including iteration order).

use super::types::Vertex;
use super::weighted::WeightedGraph;
use crate::error::{GraphError, Result};

/// Adjacency structure of a [`WeightedGraph`] as plain data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSnapshot<V> {
    pub directed: bool,

    /// Vertices in insertion order.
    pub vertices: Vec<V>,

    /// Stored directions `(src, dest, weight)`, grouped by source in vertex
    /// order. Undirected graphs list both directions.
    pub edges: Vec<(V, V, f64)>,
}

impl<V: Vertex> WeightedGraph<V> {
    /// Captures the graph as a [`GraphSnapshot`].
    pub fn snapshot(&self) -> GraphSnapshot<V> {
        let mut edges = Vec::new();
        for (_, slot) in self.live_slots() {
            for edge in &slot.edges {
                if let Some(dest) = self.id_at(edge.to) {
                    edges.push((slot.id.clone(), dest.clone(), edge.weight));
                }
            }
        }
        GraphSnapshot {
            directed: self.is_directed(),
            vertices: self.vertices().cloned().collect(),
            edges,
        }
    }

    /// Rebuilds a graph from a snapshot.
    ///
    /// Fails if an edge references an unknown vertex, carries an invalid
    /// weight, or (for undirected snapshots) lacks a matching mirror entry.
    pub fn from_snapshot(snapshot: GraphSnapshot<V>) -> Result<Self> {
        let mut graph = WeightedGraph::new(snapshot.directed);
        for v in snapshot.vertices {
            graph.add_vertex(v)?;
        }

        for (src, dest, weight) in &snapshot.edges {
            let (Some(s), Some(d)) = (graph.slot_index(src), graph.slot_index(dest)) else {
                return Err(GraphError::InvalidSnapshot(format!(
                    "edge {src:?} -> {dest:?} references an unknown vertex"
                )));
            };
            if !weight.is_finite() || *weight < 0.0 {
                return Err(GraphError::InvalidWeight { weight: *weight });
            }
            graph.insert_directed(s, d, *weight);
        }

        if !graph.is_directed() {
            for (src, dest, _) in &snapshot.edges {
                if graph.edge_weight(src, dest) != graph.edge_weight(dest, src) {
                    return Err(GraphError::InvalidSnapshot(format!(
                        "undirected edge {src:?} -- {dest:?} has no matching mirror"
                    )));
                }
            }
        }
        Ok(graph)
    }
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> GraphSnapshot<V> {
    /// Serializes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GraphError::InvalidSnapshot(e.to_string()))
    }
}

#[cfg(feature = "serde")]
impl<V: serde::de::DeserializeOwned> GraphSnapshot<V> {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::InvalidSnapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphGenerator;

    #[test]
    fn test_restore_preserves_order_and_weights() {
        let mut g = WeightedGraph::undirected();
        for v in ["c", "a", "b"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&"a", &"b", 1.5).unwrap();
        g.add_edge(&"c", &"a", 2.0).unwrap();
        g.add_edge(&"b", &"c", 4.0).unwrap();

        let restored = WeightedGraph::from_snapshot(g.snapshot()).unwrap();
        assert_eq!(restored.vertices().collect::<Vec<_>>(), g.vertices().collect::<Vec<_>>());
        for v in ["a", "b", "c"] {
            assert_eq!(
                restored.neighbors(&v).collect::<Vec<_>>(),
                g.neighbors(&v).collect::<Vec<_>>()
            );
        }
        assert_eq!(restored.edge_weight(&"a", &"c"), 2.0);
        assert_eq!(restored.snapshot(), g.snapshot());
    }

    #[test]
    fn test_restore_generated_graph() {
        let g = GraphGenerator::new(40).with_seed(5).generate().unwrap();
        let restored = WeightedGraph::from_snapshot(g.snapshot()).unwrap();
        assert_eq!(restored.to_string(), g.to_string());
        assert!(!restored.is_directed());
    }

    #[test]
    fn test_directed_flag_kept() {
        let mut g = WeightedGraph::directed();
        g.add_vertex(1u8).unwrap();
        g.add_vertex(2u8).unwrap();
        g.add_edge(&1, &2, 3.0).unwrap();
        let restored = WeightedGraph::from_snapshot(g.snapshot()).unwrap();
        assert!(restored.is_directed());
        assert_eq!(restored.edge_weight(&2, &1), f64::INFINITY);
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let snapshot = GraphSnapshot {
            directed: true,
            vertices: vec![0u32],
            edges: vec![(0, 1, 1.0)],
        };
        assert!(matches!(
            WeightedGraph::from_snapshot(snapshot),
            Err(GraphError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_missing_mirror_rejected() {
        let snapshot = GraphSnapshot {
            directed: false,
            vertices: vec![0u32, 1],
            edges: vec![(0, 1, 1.0)],
        };
        assert!(matches!(
            WeightedGraph::from_snapshot(snapshot),
            Err(GraphError::InvalidSnapshot(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_fixture() {
        let g = GraphGenerator::new(12).with_seed(42).generate().unwrap();
        let json = g.snapshot().to_json().unwrap();
        let parsed: GraphSnapshot<usize> = GraphSnapshot::from_json(&json).unwrap();
        let restored = WeightedGraph::from_snapshot(parsed).unwrap();
        assert_eq!(restored.to_string(), g.to_string());
        assert!(GraphSnapshot::<usize>::from_json("{not json").is_err());
    }
}
