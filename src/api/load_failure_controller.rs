use tracing::{debug, warn};

use crate::core::FailureDecision;
use crate::display::ImageDisplay;

use super::{SunViewer, ViewerEvent, ViewerSnapshot};

/// Result of reporting that the current image failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailureOutcome {
    /// Stepped one snapshot back.
    Retreated(ViewerSnapshot),
    /// Wanted to retreat but the cursor already sits on the archive floor.
    AtLowerBound(ViewerSnapshot),
    /// Ceiling exceeded; the streak was reset and nothing moved.
    StreakAbandoned(ViewerSnapshot),
}

impl LoadFailureOutcome {
    #[must_use]
    pub fn snapshot(&self) -> &ViewerSnapshot {
        match self {
            Self::Retreated(snapshot)
            | Self::AtLowerBound(snapshot)
            | Self::StreakAbandoned(snapshot) => snapshot,
        }
    }

    #[must_use]
    pub fn moved(&self) -> bool {
        matches!(self, Self::Retreated(_))
    }
}

impl<D: ImageDisplay> SunViewer<D> {
    /// Auto-retreat on a failed image load: older snapshots are more likely
    /// to exist than newer ones.
    pub fn report_load_failure(&mut self) -> LoadFailureOutcome {
        match self.failures.record_failure() {
            FailureDecision::Abandon => {
                warn!(
                    ceiling = self.failures.ceiling(),
                    current = %self.cursor.current(),
                    "too many images missing, stopping auto-retreat"
                );
                self.emit_plugin_event(ViewerEvent::RetreatStreakAbandoned);
                LoadFailureOutcome::StreakAbandoned(self.snapshot())
            }
            FailureDecision::Retreat => {
                let failure_count = self.failures.count();
                match self.step_backward() {
                    Some(snapshot) => {
                        debug!(failure_count, image_path = %snapshot.image_path, "auto-retreat");
                        self.emit_plugin_event(ViewerEvent::AutoRetreated { failure_count });
                        LoadFailureOutcome::Retreated(snapshot)
                    }
                    None => {
                        debug!(failure_count, "auto-retreat blocked at archive start");
                        self.emit_plugin_event(ViewerEvent::RetreatBlockedAtFloor {
                            failure_count,
                        });
                        LoadFailureOutcome::AtLowerBound(self.snapshot())
                    }
                }
            }
        }
    }

    /// Ends the current failure streak once an image loads.
    pub fn report_load_success(&mut self) {
        if self.failures.count() > 0 {
            debug!(failure_count = self.failures.count(), "image loaded, streak reset");
            self.failures.reset();
            self.emit_plugin_event(ViewerEvent::LoadRecovered);
        }
    }
}
