use indexmap::IndexMap;
use tracing::warn;

use crate::core::{
    Bounds, Channel, ChannelPolicy, LoadFailureTracker, NavigationState, PathResolver, TimeCursor,
    Timestamp, ViewerTimeZone,
};
use crate::display::ImageDisplay;
use crate::extensions::ViewerPlugin;

use super::ViewerSnapshot;

/// Main facade consumed by shells.
///
/// `SunViewer` owns the time cursor, the selected channel and the load
/// failure streak, and pushes a resolved snapshot to the display after every
/// state change. Calls run to completion one at a time; the shell serializes
/// inbound events before invoking it.
pub struct SunViewer<D: ImageDisplay> {
    pub(super) display: D,
    pub(super) cursor: TimeCursor,
    pub(super) channel: Channel,
    pub(super) channel_policy: ChannelPolicy,
    pub(super) mode: String,
    pub(super) resolver: PathResolver,
    pub(super) failures: LoadFailureTracker,
    pub(super) plugins: IndexMap<String, Box<dyn ViewerPlugin>>,
}

impl<D: ImageDisplay> SunViewer<D> {
    #[must_use]
    pub fn current(&self) -> Timestamp {
        self.cursor.current()
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.cursor.bounds()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.cursor.navigation()
    }

    #[must_use]
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    #[must_use]
    pub fn time_zone(&self) -> ViewerTimeZone {
        self.resolver.zone()
    }

    #[must_use]
    pub fn failure_count(&self) -> u32 {
        self.failures.count()
    }

    #[must_use]
    pub fn image_path(&self) -> String {
        self.resolver
            .resolve(self.cursor.current(), &self.channel, Some(self.mode.as_str()))
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        let zone = self.resolver.zone();
        let navigation = self.cursor.navigation();
        let bounds = self.cursor.bounds();
        ViewerSnapshot {
            image_path: self.image_path(),
            prev_available: navigation.prev_available,
            next_available: navigation.next_available,
            current: self.cursor.current().format_local(zone),
            min: bounds.min().format_local(zone),
            max: bounds.max().format_local(zone),
            channel: self.channel.code().to_owned(),
        }
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn into_display(self) -> D {
        self.display
    }

    /// Hands the current snapshot to the display and returns it.
    ///
    /// A display failure is the display's problem: it is logged and the
    /// snapshot is still returned, since state has already moved.
    pub(super) fn publish(&mut self) -> ViewerSnapshot {
        let snapshot = self.snapshot();
        if let Err(err) = self.display.present(&snapshot) {
            warn!(
                error = %err,
                image_path = %snapshot.image_path,
                "display failed to present snapshot"
            );
        }
        snapshot
    }
}
