//! Self-imposed wall-clock deadline.

use std::time::{Duration, Instant};

/// A monotonic deadline measured from the start of a solver call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    started: Instant,
    until: Instant,
}

impl Deadline {
    pub(crate) fn after(started: Instant, limit_ms: u64) -> Self {
        Self {
            started,
            until: started + Duration::from_millis(limit_ms),
        }
    }

    /// Same start, but never later than `limit_ms` from now.
    pub(crate) fn tightened(self, limit_ms: u64) -> Self {
        let candidate = Instant::now() + Duration::from_millis(limit_ms);
        Self {
            started: self.started,
            until: self.until.min(candidate),
        }
    }

    pub(crate) fn expired(&self) -> bool {
        Instant::now() >= self.until
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_expires_immediately() {
        let d = Deadline::after(Instant::now(), 0);
        assert!(d.expired());
    }

    #[test]
    fn test_tightened_never_extends() {
        let d = Deadline::after(Instant::now(), 0).tightened(10_000);
        assert!(d.expired());
        let long = Deadline::after(Instant::now(), 10_000);
        assert!(!long.expired());
        assert!(long.tightened(0).expired());
    }
}
