use crate::api::ViewerSnapshot;
use crate::display::ImageDisplay;
use crate::error::ViewerResult;

/// Headless display used by tests and the trace driver.
///
/// It records what it was asked to show so callers can assert on it.
#[derive(Debug, Default)]
pub struct NullDisplay {
    pub presented_count: usize,
    pub last: Option<ViewerSnapshot>,
}

impl ImageDisplay for NullDisplay {
    fn present(&mut self, snapshot: &ViewerSnapshot) -> ViewerResult<()> {
        self.presented_count += 1;
        self.last = Some(snapshot.clone());
        Ok(())
    }
}
