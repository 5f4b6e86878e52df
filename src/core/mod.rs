pub mod bounds;
pub mod channel;
pub mod clock;
pub mod failure_streak;
pub mod path_resolver;
pub mod time_cursor;
pub mod timestamp;

pub use bounds::{
    Bounds, DEFAULT_ARCHIVE_START, DEFAULT_PUBLISH_DELAY_MINUTES, NavigationState,
    latest_published_snapshot,
};
pub use channel::{Channel, ChannelPolicy, PathTemplate};
pub use clock::{Clock, FixedClock, SystemClock};
pub use failure_streak::{DEFAULT_FAILURE_CEILING, FailureDecision, LoadFailureTracker};
pub use path_resolver::{
    DEFAULT_IMAGE_BASE_PATH, DEFAULT_IMAGING_MODE, PathResolver, snapshot_file_stem,
};
pub use time_cursor::TimeCursor;
pub use timestamp::{MAX_OFFSET_MINUTES, TIMESTAMP_INPUT_FORMAT, Timestamp, ViewerTimeZone};
