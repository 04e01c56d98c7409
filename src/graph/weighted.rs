//! Adjacency-list weighted graph.
//!
//! Vertices live in an arena of slots addressed by `usize`; a hash index maps
//! each identifier to its slot. Every slot keeps its outgoing edges in
//! insertion order plus a neighbor → position lookup, so edge queries are
//! O(1) while iteration stays deterministic. Removed vertices leave a
//! tombstone until the arena is compacted.

use super::types::Vertex;
use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::fmt;

/// An outgoing edge stored in a vertex slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    /// Slot index of the target vertex.
    pub(crate) to: usize,
    pub(crate) weight: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct VertexSlot<V> {
    pub(crate) id: V,
    /// Outgoing edges in insertion order.
    pub(crate) edges: Vec<Edge>,
    lookup: HashMap<usize, usize>,
}

impl<V> VertexSlot<V> {
    fn new(id: V) -> Self {
        Self {
            id,
            edges: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    fn weight_to(&self, to: usize) -> Option<f64> {
        self.lookup.get(&to).map(|&pos| self.edges[pos].weight)
    }

    /// First write wins: returns `false` if an edge to `to` already exists.
    fn insert(&mut self, to: usize, weight: f64) -> bool {
        if self.lookup.contains_key(&to) {
            return false;
        }
        self.lookup.insert(to, self.edges.len());
        self.edges.push(Edge { to, weight });
        true
    }

    fn remove(&mut self, to: usize) -> bool {
        let Some(pos) = self.lookup.remove(&to) else {
            return false;
        };
        self.edges.remove(pos);
        for edge in &self.edges[pos..] {
            if let Some(p) = self.lookup.get_mut(&edge.to) {
                *p -= 1;
            }
        }
        true
    }
}

/// A weighted graph, directed or undirected.
///
/// Weights are finite and non-negative. For undirected graphs every edge is
/// stored in both directions with the same weight. Edge insertion never
/// overwrites an existing weight.
///
/// # Examples
///
/// ```
/// use u_tourgraph::graph::WeightedGraph;
///
/// let mut g = WeightedGraph::undirected();
/// for v in 0..3usize {
///     g.add_vertex(v).unwrap();
/// }
/// g.add_edge(&0, &1, 2.0).unwrap();
/// g.add_edge(&1, &0, 9.0).unwrap(); // first write wins
///
/// assert_eq!(g.edge_weight(&1, &0), 2.0);
/// assert_eq!(g.edge_weight(&0, &2), f64::INFINITY);
/// assert_eq!(g.neighbors(&0).collect::<Vec<_>>(), vec![&1]);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex> {
    directed: bool,
    slots: Vec<Option<VertexSlot<V>>>,
    index: HashMap<V, usize>,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.live_slots().map(|(_, s)| s.edges.len()).sum();
        if self.directed {
            entries
        } else {
            let loops = self
                .live_slots()
                .filter(|(i, s)| s.lookup.contains_key(i))
                .count();
            (entries - loops) / 2 + loops
        }
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.live_slots().map(|(_, s)| &s.id)
    }

    /// Adds a vertex. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, v: V) -> Result<()> {
        if !v.is_valid_id() {
            return Err(GraphError::InvalidVertex(format!("{v:?}")));
        }
        if self.index.contains_key(&v) {
            return Ok(());
        }
        let slot = self.slots.len();
        self.slots.push(Some(VertexSlot::new(v.clone())));
        self.index.insert(v, slot);
        Ok(())
    }

    /// Adds a weighted edge, mirrored for undirected graphs.
    ///
    /// Each direction that already has an edge keeps its weight. Self-loops
    /// are ignored.
    pub fn add_edge(&mut self, src: &V, dest: &V, weight: f64) -> Result<()> {
        let s = self.slot_index(src).ok_or_else(|| GraphError::not_found(src))?;
        let d = self.slot_index(dest).ok_or_else(|| GraphError::not_found(dest))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }
        if s == d {
            tracing::trace!(vertex = ?src, "ignoring self-loop");
            return Ok(());
        }
        self.insert_directed(s, d, weight);
        if !self.directed {
            self.insert_directed(d, s, weight);
        }
        Ok(())
    }

    /// Removes the edge `src -> dest` (and its mirror when undirected).
    /// Missing edges are ignored.
    pub fn remove_edge(&mut self, src: &V, dest: &V) {
        let (Some(s), Some(d)) = (self.slot_index(src), self.slot_index(dest)) else {
            return;
        };
        if let Some(slot) = self.slots[s].as_mut() {
            slot.remove(d);
        }
        if !self.directed {
            if let Some(slot) = self.slots[d].as_mut() {
                slot.remove(s);
            }
        }
    }

    /// Removes a vertex and every edge that references it.
    pub fn remove_vertex(&mut self, v: &V) {
        let Some(target) = self.index.remove(v) else {
            return;
        };
        self.slots[target] = None;
        for slot in self.slots.iter_mut().flatten() {
            slot.remove(target);
        }
        if self.slots.len() > 2 * self.index.len() + 16 {
            self.compact();
        }
    }

    /// Adjacent vertices in edge insertion order; empty if `v` is absent.
    pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.slot_index(v)
            .and_then(|i| self.slots[i].as_ref())
            .into_iter()
            .flat_map(move |slot| slot.edges.iter().filter_map(move |e| self.id_at(e.to)))
    }

    /// Weight of the edge `src -> dest`, or `f64::INFINITY` if there is none.
    pub fn edge_weight(&self, src: &V, dest: &V) -> f64 {
        match (self.slot_index(src), self.slot_index(dest)) {
            (Some(s), Some(d)) => self.slots[s]
                .as_ref()
                .and_then(|slot| slot.weight_to(d))
                .unwrap_or(f64::INFINITY),
            _ => f64::INFINITY,
        }
    }

    /// Whether every ordered pair of distinct vertices has a direct edge.
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        self.live_slots()
            .all(|(i, slot)| slot.edges.iter().filter(|e| e.to != i).count() == n - 1)
    }

    // ---- crate-internal arena access ----

    pub(crate) fn slot_index(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Upper bound (exclusive) on slot indices.
    pub(crate) fn slot_capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&VertexSlot<V>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn id_at(&self, index: usize) -> Option<&V> {
        self.slot(index).map(|s| &s.id)
    }

    /// Live slots in insertion order.
    pub(crate) fn live_slots(&self) -> impl Iterator<Item = (usize, &VertexSlot<V>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (i, s)))
    }

    /// Inserts one direction only, keeping first-write-wins.
    pub(crate) fn insert_directed(&mut self, src: usize, dest: usize, weight: f64) -> bool {
        match self.slots.get_mut(src).and_then(Option::as_mut) {
            Some(slot) => slot.insert(dest, weight),
            None => false,
        }
    }

    /// Drops tombstones and renumbers slots, preserving order.
    fn compact(&mut self) {
        let mut remap = vec![usize::MAX; self.slots.len()];
        let mut next = 0;
        for (old, slot) in self.slots.iter().enumerate() {
            if slot.is_some() {
                remap[old] = next;
                next += 1;
            }
        }

        let old_slots = std::mem::take(&mut self.slots);
        self.slots.reserve(next);
        for old in old_slots.into_iter().flatten() {
            let mut slot = VertexSlot::new(old.id);
            for edge in old.edges {
                slot.insert(remap[edge.to], edge.weight);
            }
            self.index.insert(slot.id.clone(), self.slots.len());
            self.slots.push(Some(slot));
        }
    }
}

impl<V: Vertex> fmt::Display for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, (_, slot)) in self.live_slots().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {{", slot.id)?;
            for (k, edge) in slot.edges.iter().enumerate() {
                if k > 0 {
                    write!(f, ", ")?;
                }
                if let Some(to) = self.id_at(edge.to) {
                    write!(f, "{to:?}: {}", edge.weight)?;
                }
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> WeightedGraph<usize> {
        let mut g = WeightedGraph::undirected();
        for v in 0..4 {
            g.add_vertex(v).unwrap();
        }
        for (s, d, w) in [(0, 1, 1.0), (0, 2, 4.0), (0, 3, 5.0), (1, 2, 2.0), (1, 3, 3.0), (2, 3, 3.0)] {
            g.add_edge(&s, &d, w).unwrap();
        }
        g
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g: WeightedGraph<usize> = WeightedGraph::undirected();
        g.add_vertex(1).unwrap();
        g.add_vertex(1).unwrap();
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_add_vertex_rejects_blank_string() {
        let mut g: WeightedGraph<String> = WeightedGraph::undirected();
        assert!(matches!(
            g.add_vertex(String::new()),
            Err(GraphError::InvalidVertex(_))
        ));
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut g = WeightedGraph::undirected();
        g.add_vertex(0usize).unwrap();
        assert_eq!(
            g.add_edge(&0, &9, 1.0),
            Err(GraphError::VertexNotFound("9".into()))
        );
        assert_eq!(
            g.add_edge(&9, &0, 1.0),
            Err(GraphError::VertexNotFound("9".into()))
        );
    }

    #[test]
    fn test_add_edge_rejects_bad_weight() {
        let mut g = square();
        assert!(matches!(
            g.add_edge(&0, &1, -1.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_edge(&0, &1, f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_first_write_wins() {
        let mut g = square();
        g.add_edge(&0, &1, 42.0).unwrap();
        assert_eq!(g.edge_weight(&0, &1), 1.0);
        assert_eq!(g.edge_weight(&1, &0), 1.0);
    }

    #[test]
    fn test_undirected_mirror() {
        let g = square();
        assert_eq!(g.edge_weight(&3, &0), 5.0);
        assert_eq!(g.edge_count(), 6);
        assert!(g.is_complete());
    }

    #[test]
    fn test_directed_single_direction() {
        let mut g = WeightedGraph::directed();
        g.add_vertex('a').unwrap();
        g.add_vertex('b').unwrap();
        g.add_edge(&'a', &'b', 3.0).unwrap();
        assert_eq!(g.edge_weight(&'a', &'b'), 3.0);
        assert_eq!(g.edge_weight(&'b', &'a'), f64::INFINITY);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.is_complete());

        g.add_edge(&'b', &'a', 7.0).unwrap();
        assert_eq!(g.edge_weight(&'b', &'a'), 7.0);
        assert!(g.is_complete());
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = square();
        g.add_edge(&2, &2, 1.0).unwrap();
        assert_eq!(g.edge_weight(&2, &2), f64::INFINITY);
        assert!(!g.neighbors(&2).any(|&v| v == 2));
    }

    #[test]
    fn test_remove_edge_both_directions() {
        let mut g = square();
        g.remove_edge(&1, &2);
        assert_eq!(g.edge_weight(&1, &2), f64::INFINITY);
        assert_eq!(g.edge_weight(&2, &1), f64::INFINITY);
        // missing edge and missing vertex are no-ops
        g.remove_edge(&1, &2);
        g.remove_edge(&1, &77);
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn test_remove_edge_directed_keeps_reverse() {
        let mut g = WeightedGraph::directed();
        g.add_vertex(0u32).unwrap();
        g.add_vertex(1u32).unwrap();
        g.add_edge(&0, &1, 1.0).unwrap();
        g.add_edge(&1, &0, 2.0).unwrap();
        g.remove_edge(&0, &1);
        assert_eq!(g.edge_weight(&0, &1), f64::INFINITY);
        assert_eq!(g.edge_weight(&1, &0), 2.0);
    }

    #[test]
    fn test_remove_vertex_purges_references() {
        let mut g = square();
        g.remove_vertex(&1);
        assert!(!g.contains_vertex(&1));
        for v in [0usize, 2, 3] {
            assert!(g.neighbors(&v).all(|&n| n != 1), "{v} still sees 1");
        }
        assert_eq!(g.edge_count(), 3);
        g.remove_vertex(&1);
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn test_neighbors_insertion_order() {
        let mut g = WeightedGraph::undirected();
        for v in [5usize, 1, 9, 3] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&5, &9, 1.0).unwrap();
        g.add_edge(&5, &1, 1.0).unwrap();
        g.add_edge(&3, &5, 1.0).unwrap();
        assert_eq!(g.neighbors(&5).copied().collect::<Vec<_>>(), vec![9, 1, 3]);
        g.remove_edge(&5, &1);
        assert_eq!(g.neighbors(&5).copied().collect::<Vec<_>>(), vec![9, 3]);
        assert_eq!(g.neighbors(&42).count(), 0);
    }

    #[test]
    fn test_compaction_preserves_graph() {
        let mut g = WeightedGraph::undirected();
        for v in 0..40usize {
            g.add_vertex(v).unwrap();
        }
        for v in 1..40usize {
            g.add_edge(&0, &v, v as f64).unwrap();
            g.add_edge(&v, &((v % 39) + 1), 100.0 + v as f64).unwrap();
        }
        for v in 1..30usize {
            g.remove_vertex(&v);
        }
        assert!(g.slot_capacity() < 40, "arena should have been compacted");
        assert_eq!(g.vertices().copied().collect::<Vec<_>>(), {
            let mut expected = vec![0];
            expected.extend(30..40);
            expected
        });
        assert_eq!(g.edge_weight(&0, &35), 35.0);
        assert_eq!(g.edge_weight(&35, &36), 135.0);
        assert_eq!(g.neighbors(&0).copied().collect::<Vec<_>>(), (30..40).collect::<Vec<_>>());

        // re-adding a removed vertex yields a fresh, isolated vertex
        g.add_vertex(3).unwrap();
        assert_eq!(g.neighbors(&3).count(), 0);
    }

    #[test]
    fn test_display_lists_adjacency() {
        let mut g = WeightedGraph::undirected();
        g.add_vertex(0usize).unwrap();
        g.add_vertex(1usize).unwrap();
        g.add_edge(&0, &1, 2.5).unwrap();
        assert_eq!(g.to_string(), "{0: {1: 2.5}, 1: {0: 2.5}}");
    }

    proptest! {
        #[test]
        fn prop_undirected_stays_symmetric(
            ops in proptest::collection::vec((0u8..4, 0usize..8, 0usize..8, 0u32..50), 1..120)
        ) {
            let mut g = WeightedGraph::undirected();
            for v in 0..8usize {
                g.add_vertex(v).unwrap();
            }
            for (op, a, b, w) in ops {
                match op {
                    0 | 1 => { let _ = g.add_edge(&a, &b, w as f64); }
                    2 => g.remove_edge(&a, &b),
                    _ => {
                        g.remove_vertex(&a);
                        g.add_vertex(a).unwrap();
                    }
                }
            }
            let vertices: Vec<usize> = g.vertices().copied().collect();
            for &u in &vertices {
                for &v in g.neighbors(&u) {
                    prop_assert!(g.contains_vertex(&v));
                    prop_assert_eq!(g.edge_weight(&u, &v), g.edge_weight(&v, &u));
                }
            }
        }
    }
}
