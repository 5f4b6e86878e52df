use tracing::{debug, warn};

use crate::core::{Channel, ChannelPolicy};
use crate::display::ImageDisplay;
use crate::error::{ViewerError, ViewerResult};

use super::{SunViewer, ViewerEvent, ViewerSnapshot};

impl<D: ImageDisplay> SunViewer<D> {
    /// Switches the image series; the timestamp is left where it is.
    ///
    /// Under the strict policy only menu channels are accepted. The
    /// permissive policy also admits the deprecated coronagraph and unlisted
    /// codes.
    pub fn set_channel(&mut self, code: &str) -> ViewerResult<ViewerSnapshot> {
        let channel = match self.parse_selectable_channel(code) {
            Ok(channel) => channel,
            Err(err) => {
                warn!(error = %err, "ignoring channel change");
                self.emit_plugin_event(ViewerEvent::InputRejected);
                return Err(err);
            }
        };

        debug!(from = self.channel.code(), to = channel.code(), "set channel");
        self.channel = channel;
        self.emit_plugin_event(ViewerEvent::ChannelChanged);
        Ok(self.publish())
    }

    #[must_use]
    pub fn channel_policy(&self) -> ChannelPolicy {
        self.channel_policy
    }

    fn parse_selectable_channel(&self, code: &str) -> ViewerResult<Channel> {
        let channel = Channel::parse(code, self.channel_policy)?;
        if self.channel_policy == ChannelPolicy::Strict && !channel.is_selectable() {
            return Err(ViewerError::ChannelNotSelectable(code.to_owned()));
        }
        Ok(channel)
    }
}
