use serde::{Deserialize, Serialize};

use crate::core::NavigationState;

/// Read-only state passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub navigation: NavigationState,
    pub failure_count: u32,
    /// Current timestamp as unix seconds.
    pub current_unix_seconds: i64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewerEvent {
    TimeChanged { navigation: NavigationState },
    ChannelChanged,
    AutoRetreated { failure_count: u32 },
    RetreatBlockedAtFloor { failure_count: u32 },
    RetreatStreakAbandoned,
    LoadRecovered,
    InputRejected,
}

/// Observer hook for bounded custom logic.
///
/// Plugins see events and context but cannot mutate the viewer.
pub trait ViewerPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ViewerEvent, context: ViewerContext);
}
