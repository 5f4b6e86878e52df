use serde::{Deserialize, Serialize};

/// State handed to the display collaborator after every mutating call.
///
/// Timestamps use the minute-precision wall-clock format of the viewer zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerSnapshot {
    pub image_path: String,
    pub prev_available: bool,
    pub next_available: bool,
    pub current: String,
    pub min: String,
    pub max: String,
    pub channel: String,
}
