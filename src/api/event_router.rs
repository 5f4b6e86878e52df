use crate::display::ImageDisplay;
use crate::error::ViewerResult;
use crate::interaction::InputEvent;

use super::{SunViewer, ViewerSnapshot};

impl<D: ImageDisplay> SunViewer<D> {
    /// Routes one inbound event to the matching operation.
    ///
    /// Returns the published snapshot, or `None` when the event changed
    /// nothing (a gated step, an unbound key, a load success).
    pub fn handle_event(&mut self, event: InputEvent) -> ViewerResult<Option<ViewerSnapshot>> {
        let snapshot = match event {
            InputEvent::SetTime(raw) => Some(self.set_time(&raw)?),
            InputEvent::StepBackward => self.step_backward(),
            InputEvent::StepForward => self.step_forward(),
            InputEvent::SetChannel(code) => Some(self.set_channel(&code)?),
            InputEvent::Key(code) => self.handle_shortcut(&code),
            InputEvent::LoadFailed => {
                let outcome = self.report_load_failure();
                outcome.moved().then(|| outcome.snapshot().clone())
            }
            InputEvent::LoadSucceeded => {
                self.report_load_success();
                None
            }
        };
        Ok(snapshot)
    }
}
