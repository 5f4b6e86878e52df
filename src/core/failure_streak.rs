/// Consecutive load failures tolerated before a retreat streak is abandoned.
pub const DEFAULT_FAILURE_CEILING: u32 = 100;

/// What the viewer should do about one reported load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDecision {
    /// Step one snapshot back and try again.
    Retreat,
    /// Ceiling exceeded: the counter was reset and no step is taken.
    Abandon,
}

/// Bounded counter of consecutive image-load failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadFailureTracker {
    ceiling: u32,
    count: u32,
}

impl Default for LoadFailureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_CEILING)
    }
}

impl LoadFailureTracker {
    #[must_use]
    pub fn new(ceiling: u32) -> Self {
        Self { ceiling, count: 0 }
    }

    #[must_use]
    pub fn ceiling(self) -> u32 {
        self.ceiling
    }

    #[must_use]
    pub fn count(self) -> u32 {
        self.count
    }

    /// The counter resets only once it has gone past the ceiling, so a streak
    /// retreats `ceiling + 1` times before the next failure abandons it.
    pub fn record_failure(&mut self) -> FailureDecision {
        if self.count > self.ceiling {
            self.count = 0;
            return FailureDecision::Abandon;
        }
        self.count = self.count.saturating_add(1);
        FailureDecision::Retreat
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
