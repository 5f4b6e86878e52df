use std::fmt;

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// Minute-precision local wall-clock format exchanged with the shell.
pub const TIMESTAMP_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Largest accepted fixed offset magnitude, exclusive.
pub const MAX_OFFSET_MINUTES: i16 = 24 * 60;

/// Zone whose calendar fields drive display strings and archive paths.
///
/// Ordering and bound checks never depend on the zone; they compare absolute
/// instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewerTimeZone {
    /// Host system zone, DST aware.
    #[default]
    Local,
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl ViewerTimeZone {
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::FixedOffsetMinutes { minutes } => minutes.abs() < MAX_OFFSET_MINUTES,
            Self::Local | Self::Utc => true,
        }
    }

    fn fixed_offset(self) -> FixedOffset {
        let minutes = match self {
            Self::FixedOffsetMinutes { minutes } => minutes,
            Self::Local | Self::Utc => 0,
        };
        FixedOffset::east_opt(i32::from(minutes) * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Wall-clock reading of `instant` in this zone.
    #[must_use]
    pub fn to_naive_local(self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Utc => instant.naive_utc(),
            Self::FixedOffsetMinutes { .. } => {
                instant.with_timezone(&self.fixed_offset()).naive_local()
            }
        }
    }

    /// Maps a wall-clock reading back to an absolute instant.
    #[must_use]
    pub fn from_naive_local(self, naive: NaiveDateTime) -> LocalResult<DateTime<Utc>> {
        match self {
            Self::Local => Local
                .from_local_datetime(&naive)
                .map(|local| local.with_timezone(&Utc)),
            Self::Utc => LocalResult::Single(naive.and_utc()),
            Self::FixedOffsetMinutes { .. } => self
                .fixed_offset()
                .from_local_datetime(&naive)
                .map(|fixed| fixed.with_timezone(&Utc)),
        }
    }
}

/// Absolute point in time used by the navigation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    #[must_use]
    pub fn as_utc(self) -> DateTime<Utc> {
        self.0
    }

    /// Parses a `YYYY-MM-DDTHH:mm` wall-clock string read in `zone`.
    ///
    /// Readings that fall into a DST gap are rejected. Ambiguous readings
    /// resolve to the earlier instant.
    pub fn parse_local(raw: &str, zone: ViewerTimeZone) -> ViewerResult<Self> {
        if !has_input_shape(raw) {
            return Err(ViewerError::InvalidInput {
                raw: raw.to_owned(),
                reason: "expected zero-padded YYYY-MM-DDTHH:mm".to_owned(),
            });
        }
        let naive = NaiveDateTime::parse_from_str(raw, TIMESTAMP_INPUT_FORMAT).map_err(|err| {
            ViewerError::InvalidInput {
                raw: raw.to_owned(),
                reason: err.to_string(),
            }
        })?;

        pick_local_instant(raw, zone.from_naive_local(naive))
    }

    /// Formats the wall-clock reading in `zone` as `YYYY-MM-DDTHH:mm`.
    #[must_use]
    pub fn format_local(self, zone: ViewerTimeZone) -> String {
        zone.to_naive_local(self.0)
            .format(TIMESTAMP_INPUT_FORMAT)
            .to_string()
    }

    #[must_use]
    pub fn local(self, zone: ViewerTimeZone) -> NaiveDateTime {
        zone.to_naive_local(self.0)
    }

    /// Shifts by whole hours. Returns `None` outside chrono's representable range.
    #[must_use]
    pub fn shifted_hours(self, hours: i64) -> Option<Self> {
        let delta = TimeDelta::try_hours(hours)?;
        self.0.checked_add_signed(delta).map(Self)
    }
}

// chrono's parser tolerates unpadded fields, whitespace and signed years.
fn has_input_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            10 => *byte == b'T',
            13 => *byte == b':',
            _ => byte.is_ascii_digit(),
        })
}

fn pick_local_instant(
    raw: &str,
    resolved: LocalResult<DateTime<Utc>>,
) -> ViewerResult<Timestamp> {
    match resolved {
        LocalResult::Single(instant) => Ok(Timestamp(instant)),
        LocalResult::Ambiguous(earliest, latest) => Ok(Timestamp(earliest.min(latest))),
        LocalResult::None => Err(ViewerError::InvalidInput {
            raw: raw.to_owned(),
            reason: "wall-clock time does not exist in the viewer time zone".to_owned(),
        }),
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%MZ"))
    }
}

#[cfg(test)]
mod tests {
    use super::{Timestamp, ViewerTimeZone, pick_local_instant};
    use crate::error::ViewerError;
    use chrono::{LocalResult, TimeZone, Utc};

    const PLUS_TWO: ViewerTimeZone = ViewerTimeZone::FixedOffsetMinutes { minutes: 120 };

    #[test]
    fn parse_reads_wall_clock_in_zone() {
        let ts = Timestamp::parse_local("2012-03-04T05:00", PLUS_TWO).expect("parse");
        let expected = Utc.with_ymd_and_hms(2012, 3, 4, 3, 0, 0).single().expect("utc");
        assert_eq!(ts.as_utc(), expected);
        assert_eq!(ts.format_local(PLUS_TWO), "2012-03-04T05:00");
        assert_eq!(ts.format_local(ViewerTimeZone::Utc), "2012-03-04T03:00");
    }

    #[test]
    fn parse_rejects_seconds_suffix_and_garbage() {
        for raw in [
            "2012-03-04T05:00:30",
            "",
            "yesterday",
            "2012-13-01T00:00",
            "2012-3-4T5:0",
            "2012-03-04T5:00",
            "2012-03-04T 05:00",
            "+2012-03-04T05:00",
            " 2012-03-04T05:00",
            "2012-03-04 05:00",
        ] {
            let err = Timestamp::parse_local(raw, ViewerTimeZone::Utc).expect_err("must fail");
            assert!(matches!(err, ViewerError::InvalidInput { .. }), "{raw}");
        }
    }

    #[test]
    fn dst_gap_reading_is_invalid_input() {
        let err = pick_local_instant("2024-03-10T02:30", LocalResult::None).expect_err("gap");
        let ViewerError::InvalidInput { raw, reason } = err else {
            panic!("expected invalid input, got {err:?}");
        };
        assert_eq!(raw, "2024-03-10T02:30");
        assert!(reason.contains("does not exist"));
    }

    #[test]
    fn ambiguous_reading_takes_earlier_instant() {
        let earlier = Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).single().expect("earlier");
        let later = Utc.with_ymd_and_hms(2024, 11, 3, 6, 30, 0).single().expect("later");
        let ts = pick_local_instant("2024-11-03T01:30", LocalResult::Ambiguous(earlier, later))
            .expect("ambiguous resolves");
        assert_eq!(ts.as_utc(), earlier);
    }

    #[test]
    fn shifting_by_hours_keeps_minutes() {
        let ts = Timestamp::parse_local("2012-03-04T00:20", ViewerTimeZone::Utc).expect("parse");
        let back = ts.shifted_hours(-1).expect("shift");
        assert_eq!(back.format_local(ViewerTimeZone::Utc), "2012-03-03T23:20");
    }

    #[test]
    fn out_of_range_fixed_offset_is_invalid() {
        assert!(!ViewerTimeZone::FixedOffsetMinutes { minutes: 1440 }.is_valid());
        assert!(ViewerTimeZone::FixedOffsetMinutes { minutes: -330 }.is_valid());
    }
}
