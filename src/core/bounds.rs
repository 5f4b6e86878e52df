use chrono::{DateTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Timestamp, ViewerTimeZone};
use crate::error::{ViewerError, ViewerResult};

/// Earliest archive coverage, as a wall-clock reading in the viewer zone.
pub const DEFAULT_ARCHIVE_START: &str = "2010-05-19T00:00";

/// Minutes past the hour before that hour's snapshot is expected to exist.
pub const DEFAULT_PUBLISH_DELAY_MINUTES: u32 = 30;

/// Immutable navigable range fixed at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: Timestamp,
    max: Timestamp,
}

impl Bounds {
    pub fn new(min: Timestamp, max: Timestamp) -> ViewerResult<Self> {
        if min > max {
            return Err(ViewerError::InvalidConfig(format!(
                "archive start {min} is after the latest snapshot {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Builds bounds whose ceiling is the latest snapshot published by `now`.
    pub fn from_now(
        min: Timestamp,
        now: DateTime<Utc>,
        zone: ViewerTimeZone,
        publish_delay_minutes: u32,
    ) -> ViewerResult<Self> {
        let max = latest_published_snapshot(now, zone, publish_delay_minutes)?;
        Self::new(min, max)
    }

    #[must_use]
    pub fn min(self) -> Timestamp {
        self.min
    }

    #[must_use]
    pub fn max(self) -> Timestamp {
        self.max
    }

    #[must_use]
    pub fn contains(self, candidate: Timestamp) -> bool {
        candidate >= self.min && candidate <= self.max
    }

    #[must_use]
    pub fn clamp(self, candidate: Timestamp) -> Timestamp {
        candidate.clamp(self.min, self.max)
    }
}

/// Rounds `now` down to the top of its local hour, stepping back one more
/// hour while fewer than `publish_delay_minutes` have elapsed.
pub fn latest_published_snapshot(
    now: DateTime<Utc>,
    zone: ViewerTimeZone,
    publish_delay_minutes: u32,
) -> ViewerResult<Timestamp> {
    let local = zone.to_naive_local(now);
    let into_hour = TimeDelta::minutes(i64::from(local.minute()))
        + TimeDelta::seconds(i64::from(local.second()))
        + TimeDelta::nanoseconds(i64::from(local.nanosecond()));

    let top_of_hour = now
        .checked_sub_signed(into_hour)
        .map(Timestamp::from_utc)
        .ok_or_else(|| ViewerError::InvalidConfig(format!("clock reading {now} is out of range")))?;

    if local.minute() >= publish_delay_minutes {
        return Ok(top_of_hour);
    }
    top_of_hour
        .shifted_hours(-1)
        .ok_or_else(|| ViewerError::InvalidConfig(format!("clock reading {now} is out of range")))
}

/// Derived navigation affordances. Never stored independently of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub prev_available: bool,
    pub next_available: bool,
}

impl NavigationState {
    #[must_use]
    pub fn derive(current: Timestamp, bounds: Bounds) -> Self {
        Self {
            prev_available: current > bounds.min(),
            next_available: current < bounds.max(),
        }
    }
}
