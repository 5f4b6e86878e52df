//! Observer extensions for hosts embedding the viewer.

pub mod plugins;

pub use plugins::{ViewerContext, ViewerEvent, ViewerPlugin};
