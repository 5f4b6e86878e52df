mod channel_controller;
mod event_router;
mod json_contract;
mod load_failure_controller;
mod navigation_controller;
mod plugin_dispatch;
mod plugin_registry;
mod viewer;
mod viewer_config;
mod viewer_init;
mod viewer_session;
mod viewer_snapshot;

pub use crate::extensions::{ViewerContext, ViewerEvent, ViewerPlugin};
pub use json_contract::{VIEWER_SNAPSHOT_JSON_SCHEMA_V1, ViewerSnapshotJsonContractV1};
pub use load_failure_controller::LoadFailureOutcome;
pub use viewer::SunViewer;
pub use viewer_config::ViewerConfig;
pub use viewer_session::ViewerSession;
pub use viewer_snapshot::ViewerSnapshot;
