use tracing::{debug, trace};

use crate::display::ImageDisplay;
use crate::interaction::{InputEventSource, SubscriptionId};

use super::{SunViewer, ViewerSnapshot};

/// Binds a viewer to an environment event source.
///
/// The shell owns the source; the session only subscribes on `mount`,
/// drains events strictly in arrival order on `pump`, and unsubscribes on
/// `unmount`.
pub struct ViewerSession<D: ImageDisplay, S: InputEventSource> {
    viewer: SunViewer<D>,
    source: S,
    subscription: Option<SubscriptionId>,
}

impl<D: ImageDisplay, S: InputEventSource> ViewerSession<D, S> {
    #[must_use]
    pub fn new(viewer: SunViewer<D>, source: S) -> Self {
        Self {
            viewer,
            source,
            subscription: None,
        }
    }

    /// Idempotent.
    pub fn mount(&mut self) {
        if self.subscription.is_none() {
            let id = self.source.subscribe();
            debug!(?id, "viewer session mounted");
            self.subscription = Some(id);
        }
    }

    /// Returns `true` when a live subscription was released.
    pub fn unmount(&mut self) -> bool {
        let Some(id) = self.subscription.take() else {
            return false;
        };
        debug!(?id, "viewer session unmounted");
        self.source.unsubscribe(id)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Processes every pending event and returns the snapshots published on
    /// the way. Rejected events are no-ops, already logged by the viewer.
    pub fn pump(&mut self) -> Vec<ViewerSnapshot> {
        let Some(id) = self.subscription else {
            return Vec::new();
        };
        let mut published = Vec::new();
        while let Some(event) = self.source.next_event(id) {
            match self.viewer.handle_event(event) {
                Ok(Some(snapshot)) => published.push(snapshot),
                Ok(None) => {}
                Err(err) => trace!(error = %err, "event rejected"),
            }
        }
        published
    }

    #[must_use]
    pub fn viewer(&self) -> &SunViewer<D> {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut SunViewer<D> {
        &mut self.viewer
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unmounts and hands back both halves.
    pub fn into_parts(mut self) -> (SunViewer<D>, S) {
        self.unmount();
        (self.viewer, self.source)
    }
}
