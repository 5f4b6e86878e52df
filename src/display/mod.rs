mod null_display;

pub use null_display::NullDisplay;

use crate::api::ViewerSnapshot;
use crate::error::ViewerResult;

/// Contract implemented by the display collaborator.
///
/// The viewer hands over a fully resolved snapshot after every state change;
/// fetching and drawing the image stays on the display side.
pub trait ImageDisplay {
    fn present(&mut self, snapshot: &ViewerSnapshot) -> ViewerResult<()>;
}
