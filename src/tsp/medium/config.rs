//! Medium-band heuristic configuration.

/// Configuration for [`MediumTspHeuristic`](super::MediumTspHeuristic).
///
/// # Examples
///
/// ```
/// use u_tourgraph::tsp::MediumConfig;
///
/// let config = MediumConfig::default()
///     .with_time_limit_ms(200)
///     .with_max_kicks(500)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediumConfig {
    /// Wall-clock budget for the whole call, in milliseconds.
    pub time_limit_ms: u64,

    /// Candidate neighbors per city for 2-opt and Or-opt.
    pub neighbor_count: usize,

    /// Longest segment Or-opt relocates.
    pub max_segment: usize,

    /// Double-bridge kicks per chain after the first local optimum.
    ///
    /// The result is reproducible whenever every chain finishes its kicks
    /// inside the time budget.
    pub max_kicks: usize,

    /// Kicks only cut the tour within this many consecutive positions.
    pub kick_window: usize,

    /// Independent kick chains; the cheapest result wins.
    ///
    /// With the `parallel` feature the chains run on the rayon pool.
    pub chains: usize,

    /// Random seed. `None` uses 42.
    pub seed: Option<u64>,
}

impl Default for MediumConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 350,
            neighbor_count: 12,
            max_segment: 3,
            max_kicks: 1000,
            kick_window: 50,
            chains: 1,
            seed: None,
        }
    }
}

impl MediumConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_neighbor_count(mut self, k: usize) -> Self {
        self.neighbor_count = k;
        self
    }

    pub fn with_max_segment(mut self, len: usize) -> Self {
        self.max_segment = len;
        self
    }

    pub fn with_max_kicks(mut self, n: usize) -> Self {
        self.max_kicks = n;
        self
    }

    pub fn with_kick_window(mut self, w: usize) -> Self {
        self.kick_window = w;
        self
    }

    pub fn with_chains(mut self, n: usize) -> Self {
        self.chains = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.neighbor_count == 0 {
            return Err("neighbor_count must be positive".into());
        }
        if self.max_segment == 0 {
            return Err("max_segment must be positive".into());
        }
        if self.kick_window < 3 {
            return Err(format!("kick_window must be at least 3, got {}", self.kick_window));
        }
        if self.chains == 0 {
            return Err("chains must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MediumConfig::default();
        assert_eq!(config.time_limit_ms, 350);
        assert_eq!(config.chains, 1);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert!(MediumConfig::default().with_neighbor_count(0).validate().is_err());
        assert!(MediumConfig::default().with_max_segment(0).validate().is_err());
        assert!(MediumConfig::default().with_chains(0).validate().is_err());
        assert!(MediumConfig::default().with_kick_window(2).validate().is_err());
    }

    #[test]
    fn test_zero_kicks_is_valid() {
        assert!(MediumConfig::default().with_max_kicks(0).validate().is_ok());
    }
}
