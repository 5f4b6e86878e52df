use serde::{Deserialize, Serialize};

use crate::core::channel::is_path_safe;
use crate::core::{
    Channel, ChannelPolicy, DEFAULT_ARCHIVE_START, DEFAULT_FAILURE_CEILING,
    DEFAULT_IMAGE_BASE_PATH, DEFAULT_IMAGING_MODE, DEFAULT_PUBLISH_DELAY_MINUTES, Timestamp,
    ViewerTimeZone,
};
use crate::error::{ViewerError, ViewerResult};

/// Public viewer bootstrap configuration.
///
/// Serializable so shells can ship deployment settings as JSON instead of
/// inventing an ad-hoc format. Every field has a default matching the
/// reference deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub image_base_path: String,
    pub mode: String,
    /// Earliest archive coverage as `YYYY-MM-DDTHH:mm` in `time_zone`.
    pub archive_start: String,
    pub default_channel: String,
    pub failure_ceiling: u32,
    pub publish_delay_minutes: u32,
    pub channel_policy: ChannelPolicy,
    pub time_zone: ViewerTimeZone,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_base_path: DEFAULT_IMAGE_BASE_PATH.to_owned(),
            mode: DEFAULT_IMAGING_MODE.to_owned(),
            archive_start: DEFAULT_ARCHIVE_START.to_owned(),
            default_channel: Channel::default().code().to_owned(),
            failure_ceiling: DEFAULT_FAILURE_CEILING,
            publish_delay_minutes: DEFAULT_PUBLISH_DELAY_MINUTES,
            channel_policy: ChannelPolicy::default(),
            time_zone: ViewerTimeZone::default(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn with_time_zone(mut self, time_zone: ViewerTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    #[must_use]
    pub fn with_channel_policy(mut self, policy: ChannelPolicy) -> Self {
        self.channel_policy = policy;
        self
    }

    #[must_use]
    pub fn with_archive_start(mut self, archive_start: impl Into<String>) -> Self {
        self.archive_start = archive_start.into();
        self
    }

    #[must_use]
    pub fn with_default_channel(mut self, code: impl Into<String>) -> Self {
        self.default_channel = code.into();
        self
    }

    #[must_use]
    pub fn with_failure_ceiling(mut self, ceiling: u32) -> Self {
        self.failure_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_image_base_path(mut self, base: impl Into<String>) -> Self {
        self.image_base_path = base.into();
        self
    }

    /// Checks field-level constraints that do not depend on the clock.
    pub fn validate(&self) -> ViewerResult<()> {
        if self.image_base_path.trim().is_empty() {
            return Err(ViewerError::InvalidConfig(
                "image base path must not be empty".to_owned(),
            ));
        }
        if !is_path_safe(&self.mode) {
            return Err(ViewerError::InvalidConfig(
                "mode must be a single non-empty path segment".to_owned(),
            ));
        }
        if self.failure_ceiling == 0 {
            return Err(ViewerError::InvalidConfig(
                "failure ceiling must be > 0".to_owned(),
            ));
        }
        if self.publish_delay_minutes >= 60 {
            return Err(ViewerError::InvalidConfig(
                "publish delay must be < 60 minutes".to_owned(),
            ));
        }
        if !self.time_zone.is_valid() {
            return Err(ViewerError::InvalidConfig(
                "fixed time zone offset must be within +/- 24h".to_owned(),
            ));
        }
        self.archive_start_timestamp()?;
        self.default_channel()?;
        Ok(())
    }

    pub fn archive_start_timestamp(&self) -> ViewerResult<Timestamp> {
        Timestamp::parse_local(&self.archive_start, self.time_zone).map_err(|err| {
            ViewerError::InvalidConfig(format!("archive start is not a valid timestamp: {err}"))
        })
    }

    /// The initial channel must be one a user could have picked.
    pub fn default_channel(&self) -> ViewerResult<Channel> {
        let channel = Channel::parse(&self.default_channel, self.channel_policy)?;
        if self.channel_policy == ChannelPolicy::Strict && !channel.is_selectable() {
            return Err(ViewerError::ChannelNotSelectable(
                self.default_channel.clone(),
            ));
        }
        Ok(channel)
    }

    pub fn from_json_str(input: &str) -> ViewerResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ViewerError::InvalidConfig(format!("failed to parse viewer config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ViewerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ViewerError::InvalidConfig(format!("failed to serialize viewer config: {e}"))
        })
    }
}
