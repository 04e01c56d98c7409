//! Neighbor-list local search over a cyclic tour.
//!
//! Moves:
//! - **2-opt** (successor and predecessor variants), symmetric matrices only.
//! - **Or-opt**: relocate a segment of 1..=`max_segment` cities between two
//!   adjacent cities, optionally reversed (symmetric only).
//!
//! Cities whose surroundings changed are put on a work queue ("don't look
//! bits"); the search ends when the queue drains or the deadline passes.
//! The deadline is polled every [`CLOCK_STRIDE`] queue pops, and every pop
//! does bounded work, so the overrun past the deadline stays small.
//!
//! # References
//!
//! - Croes (1958), "A method for solving traveling-salesman problems"
//! - Or (1976), "Traveling salesman-type combinatorial problems..."
//! - Bentley (1992), "Fast algorithms for geometric traveling salesman problems"
//! - Martin, Otto & Felten (1991), double-bridge kick for iterated local search

use super::budget::Deadline;
use super::instance::DistanceMatrix;
use rand::Rng;
use std::collections::VecDeque;

const EPS: f64 = 1e-9;
const CLOCK_STRIDE: u32 = 16;

/// The `k` closest cities of every city, closest first.
#[derive(Debug, Clone)]
pub(crate) struct NeighborLists {
    k: usize,
    data: Vec<usize>,
}

impl NeighborLists {
    /// Candidates are ranked by `w(i, j) + w(j, i)`, ties by index.
    pub(crate) fn build(m: &DistanceMatrix, k: usize) -> Self {
        let n = m.len();
        let k = k.min(n.saturating_sub(1));
        let mut data = Vec::with_capacity(n * k);
        let mut candidates: Vec<usize> = Vec::with_capacity(n);

        for i in 0..n {
            candidates.clear();
            candidates.extend((0..n).filter(|&j| j != i));
            let cmp = |a: &usize, b: &usize| {
                let ka = m.get(i, *a) + m.get(*a, i);
                let kb = m.get(i, *b) + m.get(*b, i);
                ka.total_cmp(&kb).then_with(|| a.cmp(b))
            };
            if k > 0 && k < candidates.len() {
                candidates.select_nth_unstable_by(k - 1, &cmp);
            }
            candidates.truncate(k);
            candidates.sort_unstable_by(&cmp);
            data.extend_from_slice(&candidates);
        }
        Self { k, data }
    }

    pub(crate) fn of(&self, i: usize) -> &[usize] {
        &self.data[i * self.k..(i + 1) * self.k]
    }
}

/// A cyclic tour with a city → position index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tour {
    order: Vec<usize>,
    pos: Vec<usize>,
}

impl Tour {
    pub(crate) fn new(order: Vec<usize>) -> Self {
        let mut pos = vec![0; order.len()];
        for (p, &c) in order.iter().enumerate() {
            pos[c] = p;
        }
        Self { order, pos }
    }

    pub(crate) fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    fn position(&self, city: usize) -> usize {
        self.pos[city]
    }

    #[inline]
    fn at(&self, position: usize) -> usize {
        self.order[position % self.order.len()]
    }

    #[inline]
    fn next(&self, city: usize) -> usize {
        let p = self.pos[city] + 1;
        if p == self.order.len() {
            self.order[0]
        } else {
            self.order[p]
        }
    }

    #[inline]
    fn prev(&self, city: usize) -> usize {
        match self.pos[city] {
            0 => self.order[self.order.len() - 1],
            p => self.order[p - 1],
        }
    }

    /// Replaces edges `(t[i], t[i+1])`, `(t[j], t[j+1])` with
    /// `(t[i], t[j])`, `(t[i+1], t[j+1])`.
    fn two_opt(&mut self, i: usize, j: usize) {
        let (lo, hi) = if i < j { (i + 1, j) } else { (j + 1, i) };
        self.order[lo..=hi].reverse();
        for p in lo..=hi {
            self.pos[self.order[p]] = p;
        }
    }

    /// Moves the `len` cities starting at `seg_pos` to sit right after `x`.
    fn relocate(&mut self, seg_pos: usize, len: usize, x: usize, reversed: bool) {
        let n = self.order.len();
        let segment: Vec<usize> = (0..len).map(|k| self.at(seg_pos + k)).collect();
        let in_segment = |c: usize, pos: &[usize]| (pos[c] + n - seg_pos) % n < len;

        let mut out = Vec::with_capacity(n);
        for &c in &self.order {
            if in_segment(c, &self.pos) {
                continue;
            }
            out.push(c);
            if c == x {
                if reversed {
                    out.extend(segment.iter().rev());
                } else {
                    out.extend_from_slice(&segment);
                }
            }
        }
        self.order = out;
        for (p, &c) in self.order.iter().enumerate() {
            self.pos[c] = p;
        }
    }

    /// Swaps the adjacent blocks `[s+a, s+b)` and `[s+b, s+c)` (cyclic).
    fn swap_blocks(&mut self, s: usize, a: usize, b: usize, c: usize) {
        let n = self.order.len();
        let mut block: Vec<usize> = (a..c).map(|k| self.at(s + k)).collect();
        block.rotate_left(b - a);
        for (k, &city) in block.iter().enumerate() {
            let p = (s + a + k) % n;
            self.order[p] = city;
            self.pos[city] = p;
        }
    }
}

/// Pending cities, each queued at most once.
#[derive(Debug, Clone)]
pub(crate) struct WorkQueue {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl WorkQueue {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(n),
            queued: vec![false; n],
        }
    }

    /// Queues every city in tour order.
    pub(crate) fn with_all(tour: &Tour) -> Self {
        let mut queue = Self::new(tour.len());
        for &c in tour.order() {
            queue.push(c);
        }
        queue
    }

    pub(crate) fn push(&mut self, city: usize) {
        if !self.queued[city] {
            self.queued[city] = true;
            self.queue.push_back(city);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let city = self.queue.pop_front()?;
        self.queued[city] = false;
        Some(city)
    }

    pub(crate) fn clear(&mut self) {
        for c in self.queue.drain(..) {
            self.queued[c] = false;
        }
    }
}

/// Outcome of one [`LocalSearch::optimize`] call.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Improvement {
    pub(crate) moves: usize,
    /// Total cost reduction.
    pub(crate) gain: f64,
    /// The deadline stopped the search before the queue drained.
    pub(crate) interrupted: bool,
}

/// Moved cities: endpoints of every removed and added edge.
type Touched = [usize; 6];

pub(crate) struct LocalSearch<'a> {
    m: &'a DistanceMatrix,
    neighbors: &'a NeighborLists,
    max_segment: usize,
    reversals: bool,
}

impl<'a> LocalSearch<'a> {
    pub(crate) fn new(m: &'a DistanceMatrix, neighbors: &'a NeighborLists, max_segment: usize) -> Self {
        Self {
            m,
            neighbors,
            max_segment,
            reversals: m.is_symmetric(),
        }
    }

    /// Applies improving moves until `queue` drains or `deadline` passes.
    pub(crate) fn optimize(&self, tour: &mut Tour, queue: &mut WorkQueue, deadline: &Deadline) -> Improvement {
        let mut out = Improvement::default();
        if tour.len() < 5 {
            queue.clear();
            return out;
        }

        let mut polls = 0u32;
        while let Some(city) = queue.pop() {
            polls = polls.wrapping_add(1);
            if polls % CLOCK_STRIDE == 1 && deadline.expired() {
                out.interrupted = true;
                queue.clear();
                break;
            }
            if let Some((gain, touched)) = self.improve_city(tour, city) {
                out.moves += 1;
                out.gain += gain;
                for c in touched {
                    queue.push(c);
                }
            }
        }
        out
    }

    fn improve_city(&self, tour: &mut Tour, a: usize) -> Option<(f64, Touched)> {
        if self.reversals {
            if let Some(found) = self.two_opt_successor(tour, a) {
                return Some(found);
            }
            if let Some(found) = self.two_opt_predecessor(tour, a) {
                return Some(found);
            }
        }
        self.or_opt(tour, a)
    }

    /// Removes `(a, next a)` and `(c, next c)` for a near neighbor `c`.
    fn two_opt_successor(&self, tour: &mut Tour, a: usize) -> Option<(f64, Touched)> {
        let m = self.m;
        let b = tour.next(a);
        let d_ab = m.get(a, b);
        for &c in self.neighbors.of(a) {
            let d_ac = m.get(a, c);
            if d_ac >= d_ab - EPS {
                break;
            }
            let d = tour.next(c);
            if c == b || d == a {
                continue;
            }
            let gain = d_ab + m.get(c, d) - d_ac - m.get(b, d);
            if gain > EPS {
                tour.two_opt(tour.position(a), tour.position(c));
                return Some((gain, [a, b, c, d, a, c]));
            }
        }
        None
    }

    /// Removes `(prev a, a)` and `(prev c, c)` for a near neighbor `c`.
    fn two_opt_predecessor(&self, tour: &mut Tour, a: usize) -> Option<(f64, Touched)> {
        let m = self.m;
        let p = tour.prev(a);
        let d_pa = m.get(p, a);
        for &c in self.neighbors.of(a) {
            let d_ac = m.get(a, c);
            if d_ac >= d_pa - EPS {
                break;
            }
            let pc = tour.prev(c);
            if c == p || pc == a {
                continue;
            }
            let gain = d_pa + m.get(pc, c) - d_ac - m.get(p, pc);
            if gain > EPS {
                tour.two_opt(tour.position(p), tour.position(pc));
                return Some((gain, [p, a, pc, c, a, c]));
            }
        }
        None
    }

    /// Best relocation of a segment starting at `f` next to a near neighbor.
    fn or_opt(&self, tour: &mut Tour, f: usize) -> Option<(f64, Touched)> {
        let m = self.m;
        let n = tour.len();
        let seg_pos = tour.position(f);
        let max_len = self.max_segment.min(n.saturating_sub(4));

        for len in 1..=max_len {
            let l = tour.at(seg_pos + len - 1);
            let p = tour.prev(f);
            let nx = tour.next(l);
            let removal = m.get(p, f) + m.get(l, nx) - m.get(p, nx);
            if removal <= EPS {
                continue;
            }

            let in_segment = |c: usize| (tour.position(c) + n - seg_pos) % n < len;
            let mut best: Option<(f64, usize, bool)> = None;
            for &c in self.neighbors.of(f).iter().chain(self.neighbors.of(l)) {
                for x in [c, tour.prev(c)] {
                    let y = tour.next(x);
                    if in_segment(x) || in_segment(y) {
                        continue;
                    }
                    let base = m.get(x, y);
                    let forward = removal - (m.get(x, f) + m.get(l, y) - base);
                    if forward > EPS && best.is_none_or(|(g, _, _)| forward > g) {
                        best = Some((forward, x, false));
                    }
                    if self.reversals && len > 1 {
                        let reversed = removal - (m.get(x, l) + m.get(f, y) - base);
                        if reversed > EPS && best.is_none_or(|(g, _, _)| reversed > g) {
                            best = Some((reversed, x, true));
                        }
                    }
                }
            }

            if let Some((gain, x, reversed)) = best {
                let y = tour.next(x);
                tour.relocate(seg_pos, len, x, reversed);
                return Some((gain, [p, nx, x, y, f, l]));
            }
        }
        None
    }
}

/// Double-bridge kick confined to a window of `window` positions.
///
/// Swaps two adjacent random blocks, which never reverses a segment and is
/// therefore valid for asymmetric matrices too. Returns the cost change and
/// the cities at the six affected edge endpoints. Needs at least 8 cities.
pub(crate) fn double_bridge<R: Rng>(
    tour: &mut Tour,
    m: &DistanceMatrix,
    window: usize,
    rng: &mut R,
) -> (f64, Touched) {
    let n = tour.len();
    let w = window.clamp(3, n - 1);
    let s = rng.random_range(0..n);
    let mut cuts = rand::seq::index::sample(rng, w, 3).into_vec();
    cuts.sort_unstable();
    let (a, b, c) = (cuts[0] + 1, cuts[1] + 1, cuts[2] + 1);

    let a0 = tour.at(s + a - 1);
    let a1 = tour.at(s + a);
    let b0 = tour.at(s + b - 1);
    let b1 = tour.at(s + b);
    let c0 = tour.at(s + c - 1);
    let c1 = tour.at(s + c);

    let before = m.get(a0, a1) + m.get(b0, b1) + m.get(c0, c1);
    let after = m.get(a0, b1) + m.get(c0, a1) + m.get(b0, c1);
    tour.swap_blocks(s, a, b, c);
    (after - before, [a0, a1, b0, b1, c0, c1])
}
