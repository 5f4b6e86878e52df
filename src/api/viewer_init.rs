use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Clock, LoadFailureTracker, PathResolver, TimeCursor};
use crate::display::ImageDisplay;
use crate::error::ViewerResult;

use super::{SunViewer, ViewerConfig};

impl<D: ImageDisplay> SunViewer<D> {
    /// Starts a session: reads the clock once to fix the ceiling, positions
    /// the cursor on it and presents the first snapshot.
    pub fn new(display: D, config: ViewerConfig, clock: &dyn Clock) -> ViewerResult<Self> {
        config.validate()?;

        let zone = config.time_zone;
        let archive_start = config.archive_start_timestamp()?;
        let channel = config.default_channel()?;
        let cursor = TimeCursor::initialize(
            archive_start,
            clock.now(),
            zone,
            config.publish_delay_minutes,
        )?;

        let mut viewer = Self {
            display,
            cursor,
            channel,
            channel_policy: config.channel_policy,
            mode: config.mode,
            resolver: PathResolver::new(config.image_base_path, zone),
            failures: LoadFailureTracker::new(config.failure_ceiling),
            plugins: IndexMap::new(),
        };

        let bounds = viewer.cursor.bounds();
        debug!(
            min = %bounds.min(),
            max = %bounds.max(),
            channel = viewer.channel.code(),
            "viewer session initialized"
        );
        viewer.publish();
        Ok(viewer)
    }
}
