//! sun-viewer: navigation core for an hourly solar imagery archive.
//!
//! The crate keeps a clamped current timestamp inside the archive bounds,
//! resolves the image path for the selected channel, and reports navigation
//! affordances to a display shell. Rendering, fetching and input wiring stay
//! with the shell.

pub mod api;
pub mod core;
pub mod display;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{SunViewer, ViewerConfig, ViewerSnapshot};
pub use error::{ViewerError, ViewerResult};
