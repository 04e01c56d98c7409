//! Large-band heuristic configuration.

/// Configuration for [`LargeTspHeuristic`](super::LargeTspHeuristic).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LargeConfig {
    /// Wall-clock budget for the whole call, in milliseconds.
    pub time_limit_ms: u64,

    /// Upper bound on the local-search polish after construction. The polish
    /// also stops at `time_limit_ms`, whichever comes first.
    pub polish_ms: u64,

    /// Candidate neighbors per city.
    pub neighbor_count: usize,

    /// Longest segment Or-opt relocates.
    pub max_segment: usize,
}

impl Default for LargeConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 350,
            polish_ms: 150,
            neighbor_count: 8,
            max_segment: 3,
        }
    }
}

impl LargeConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the polish budget. `0` returns the plain nearest-neighbor tour.
    pub fn with_polish_ms(mut self, ms: u64) -> Self {
        self.polish_ms = ms;
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

    pub fn validate(&self) -> Result<(), String> {
        if self.neighbor_count == 0 {
            return Err("neighbor_count must be positive".into());
        }
        if self.max_segment == 0 {
            return Err("max_segment must be positive".into());
        }
        Ok(())
    }
}
