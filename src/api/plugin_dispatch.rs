use crate::display::ImageDisplay;
use crate::extensions::ViewerContext;

use super::{SunViewer, ViewerEvent};

impl<D: ImageDisplay> SunViewer<D> {
    pub(super) fn plugin_context(&self) -> ViewerContext {
        ViewerContext {
            navigation: self.cursor.navigation(),
            failure_count: self.failures.count(),
            current_unix_seconds: self.cursor.current().as_utc().timestamp(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ViewerEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
