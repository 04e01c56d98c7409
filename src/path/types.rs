//! Shortest-path result type.

/// Outcome of a shortest-path query.
///
/// An unreachable target is a normal outcome, not an error; callers branch
/// on [`Route::NotReachable`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route<V> {
    /// A minimum-weight path from start to end (both inclusive).
    Found { distance: f64, path: Vec<V> },

    /// No path connects start to end.
    NotReachable,
}

impl<V> Route<V> {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Route::Found { .. })
    }

    /// Total weight, `f64::INFINITY` when unreachable.
    pub fn distance(&self) -> f64 {
        match self {
            Route::Found { distance, .. } => *distance,
            Route::NotReachable => f64::INFINITY,
        }
    }

    /// Vertices along the path, empty when unreachable.
    pub fn path(&self) -> &[V] {
        match self {
            Route::Found { path, .. } => path,
            Route::NotReachable => &[],
        }
    }

    /// `(distance, path)`, with `(INFINITY, [])` when unreachable.
    pub fn into_tuple(self) -> (f64, Vec<V>) {
        match self {
            Route::Found { distance, path } => (distance, path),
            Route::NotReachable => (f64::INFINITY, Vec::new()),
        }
    }
}
