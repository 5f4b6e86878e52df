use chrono::{DateTime, Utc};
use tracing::trace;

use crate::core::{Bounds, NavigationState, Timestamp, ViewerTimeZone};
use crate::error::ViewerResult;

/// Owns the current timestamp and the session bounds.
///
/// `set_to` is the only place bounds are enforced. Step operations gate on the
/// derived availability flags and delegate to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCursor {
    bounds: Bounds,
    current: Timestamp,
}

impl TimeCursor {
    /// Starts at the ceiling of `bounds`.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            current: bounds.max(),
        }
    }

    /// Computes the session ceiling from `now` and positions the cursor on it.
    pub fn initialize(
        archive_start: Timestamp,
        now: DateTime<Utc>,
        zone: ViewerTimeZone,
        publish_delay_minutes: u32,
    ) -> ViewerResult<Self> {
        let bounds = Bounds::from_now(archive_start, now, zone, publish_delay_minutes)?;
        Ok(Self::new(bounds))
    }

    #[must_use]
    pub fn current(&self) -> Timestamp {
        self.current
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        NavigationState::derive(self.current, self.bounds)
    }

    /// Clamps `candidate` into bounds and makes it current.
    pub fn set_to(&mut self, candidate: Timestamp) -> NavigationState {
        self.current = self.bounds.clamp(candidate);
        self.navigation()
    }

    /// Parses shell input before touching state; a parse failure leaves the
    /// cursor untouched.
    pub fn set_to_input(
        &mut self,
        raw: &str,
        zone: ViewerTimeZone,
    ) -> ViewerResult<NavigationState> {
        let candidate = Timestamp::parse_local(raw, zone)?;
        Ok(self.set_to(candidate))
    }

    pub fn step_backward(&mut self) -> Option<NavigationState> {
        if !self.navigation().prev_available {
            return None;
        }
        let target = self.current.shifted_hours(-1)?;
        trace!(from = %self.current, to = %target, "step backward");
        Some(self.set_to(target))
    }

    pub fn step_forward(&mut self) -> Option<NavigationState> {
        if !self.navigation().next_available {
            return None;
        }
        let target = self.current.shifted_hours(1)?;
        trace!(from = %self.current, to = %target, "step forward");
        Some(self.set_to(target))
    }
}
