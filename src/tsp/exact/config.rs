//! Exact solver configuration.

/// Largest vertex count [`ExactConfig::validate`] accepts. The DP table
/// holds `2^(n-1) * (n-1)` costs.
const HARD_LIMIT: usize = 20;

/// Configuration for [`ExactTspSolver`](super::ExactTspSolver).
///
/// # Examples
///
/// ```
/// use u_tourgraph::tsp::ExactConfig;
///
/// let config = ExactConfig::default().with_max_vertices(14);
/// assert!(config.validate().is_ok());
/// assert!(ExactConfig::default().with_max_vertices(40).validate().is_err());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Graphs with more vertices fail with `TooManyVertices`.
    pub max_vertices: usize,

    /// Two partial costs within this distance count as equal when picking
    /// the lexicographically smallest optimal tour.
    pub tie_epsilon: f64,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            max_vertices: 16,
            tie_epsilon: 1e-9,
        }
    }
}

impl ExactConfig {
    pub fn with_max_vertices(mut self, n: usize) -> Self {
        self.max_vertices = n;
        self
    }

    pub fn with_tie_epsilon(mut self, eps: f64) -> Self {
        self.tie_epsilon = eps;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_vertices == 0 || self.max_vertices > HARD_LIMIT {
            return Err(format!(
                "max_vertices must be in [1, {HARD_LIMIT}], got {}",
                self.max_vertices
            ));
        }
        if !self.tie_epsilon.is_finite() || self.tie_epsilon < 0.0 {
            return Err(format!(
                "tie_epsilon must be finite and non-negative, got {}",
                self.tie_epsilon
            ));
        }
        Ok(())
    }
}
