use tracing::{debug, trace, warn};

use crate::core::Timestamp;
use crate::display::ImageDisplay;
use crate::error::ViewerResult;
use crate::interaction::ShortcutKey;

use super::{SunViewer, ViewerEvent, ViewerSnapshot};

impl<D: ImageDisplay> SunViewer<D> {
    /// Moves to a wall-clock time typed by the user.
    ///
    /// Unparseable input is rejected before any state changes.
    pub fn set_time(&mut self, raw: &str) -> ViewerResult<ViewerSnapshot> {
        let zone = self.resolver.zone();
        let candidate = match Timestamp::parse_local(raw, zone) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(error = %err, "ignoring time input");
                self.emit_plugin_event(ViewerEvent::InputRejected);
                return Err(err);
            }
        };
        Ok(self.set_timestamp(candidate))
    }

    /// Moves to `candidate`, clamped into the session bounds.
    pub fn set_timestamp(&mut self, candidate: Timestamp) -> ViewerSnapshot {
        let navigation = self.cursor.set_to(candidate);
        debug!(
            requested = %candidate,
            current = %self.cursor.current(),
            prev_available = navigation.prev_available,
            next_available = navigation.next_available,
            "set time"
        );
        self.emit_plugin_event(ViewerEvent::TimeChanged { navigation });
        self.publish()
    }

    /// Returns `None` without touching state when already at the floor.
    pub fn step_backward(&mut self) -> Option<ViewerSnapshot> {
        let navigation = self.cursor.step_backward()?;
        self.emit_plugin_event(ViewerEvent::TimeChanged { navigation });
        Some(self.publish())
    }

    /// Returns `None` without touching state when already at the ceiling.
    pub fn step_forward(&mut self) -> Option<ViewerSnapshot> {
        let navigation = self.cursor.step_forward()?;
        self.emit_plugin_event(ViewerEvent::TimeChanged { navigation });
        Some(self.publish())
    }

    /// Applies a keyboard shortcut. Unbound keys are ignored.
    pub fn handle_shortcut(&mut self, code: &str) -> Option<ViewerSnapshot> {
        match ShortcutKey::from_code(code) {
            Some(ShortcutKey::ArrowLeft) => self.step_backward(),
            Some(ShortcutKey::ArrowRight) => self.step_forward(),
            None => {
                trace!(code, "unbound shortcut");
                None
            }
        }
    }
}
