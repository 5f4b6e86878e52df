use chrono::{Datelike, Timelike};

use crate::core::{Channel, PathTemplate, Timestamp, ViewerTimeZone};

/// Root of the static image tree in the reference deployment.
pub const DEFAULT_IMAGE_BASE_PATH: &str = "/img/sun";

/// The single imaging instrument the wavelength series live under.
pub const DEFAULT_IMAGING_MODE: &str = "aia";

/// Maps `(timestamp, channel, mode)` to an archive image path.
///
/// Calendar fields are read in the viewer zone because the archive tree is
/// laid out by local wall-clock hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base: String,
    zone: ViewerTimeZone,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_PATH, ViewerTimeZone::default())
    }
}

impl PathResolver {
    #[must_use]
    pub fn new(base: impl Into<String>, zone: ViewerTimeZone) -> Self {
        let mut base = base.into();
        while base.len() > 1 && base.ends_with('/') {
            base.pop();
        }
        Self { base, zone }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn zone(&self) -> ViewerTimeZone {
        self.zone
    }

    /// `mode` falls back to [`DEFAULT_IMAGING_MODE`] when `None`.
    #[must_use]
    pub fn resolve(&self, timestamp: Timestamp, channel: &Channel, mode: Option<&str>) -> String {
        let (year, stem) = snapshot_file_stem(timestamp, self.zone);
        let base = self.base.trim_end_matches('/');
        match channel.template() {
            PathTemplate::Magnetogram => format!("{base}/hmi/{year:04}/{stem}.jpg"),
            PathTemplate::Coronagraph { camera } => {
                format!("{base}/soho/{camera}/{year:04}/{stem}.jpg")
            }
            PathTemplate::Wavelength => {
                let mode = mode.unwrap_or(DEFAULT_IMAGING_MODE);
                let code = channel.code();
                format!("{base}/{mode}/{code}/{year:04}/{stem}.jpg")
            }
        }
    }
}

/// Year segment and `MMddhh` file stem for `timestamp` read in `zone`.
#[must_use]
pub fn snapshot_file_stem(timestamp: Timestamp, zone: ViewerTimeZone) -> (i32, String) {
    let local = timestamp.local(zone);
    let stem = format!(
        "{:02}{:02}{:02}",
        local.month(),
        local.day(),
        local.hour()
    );
    (local.year(), stem)
}
