use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// How unlisted channel codes are treated when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChannelPolicy {
    /// Only codes from the channel table are accepted.
    #[default]
    Strict,
    /// Unlisted codes pass through as wavelength-style codes under the
    /// current imaging mode. Kept for compatibility with archives that
    /// carry series the table does not list.
    Permissive,
}

/// Archive path layout a channel maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathTemplate {
    /// `<base>/<mode>/<code>/<year>/<MMddhh>.jpg`
    Wavelength,
    /// `<base>/hmi/<year>/<MMddhh>.jpg`
    Magnetogram,
    /// `<base>/soho/<camera>/<year>/<MMddhh>.jpg`
    Coronagraph { camera: u8 },
}

/// Imaging channel selecting the image series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    Aia94,
    Aia131,
    Aia171,
    Aia193,
    Aia211,
    Aia304,
    Aia335,
    /// 211+193+171 composite.
    AiaComposite,
    HmiMagnetogram,
    /// Deprecated LASCO C1 series; resolvable but never offered for selection.
    LascoC1,
    LascoC2,
    /// Code outside the table, admitted only under [`ChannelPolicy::Permissive`].
    Unlisted(String),
}

static MENU_ORDER: [Channel; 10] = [
    Channel::Aia94,
    Channel::Aia193,
    Channel::Aia131,
    Channel::Aia171,
    Channel::Aia211,
    Channel::Aia304,
    Channel::Aia335,
    Channel::AiaComposite,
    Channel::HmiMagnetogram,
    Channel::LascoC2,
];

impl Channel {
    /// Resolves a code from the shell.
    pub fn parse(code: &str, policy: ChannelPolicy) -> ViewerResult<Self> {
        let channel = match code {
            "0094" => Self::Aia94,
            "0131" => Self::Aia131,
            "0171" => Self::Aia171,
            "0193" => Self::Aia193,
            "0211" => Self::Aia211,
            "0304" => Self::Aia304,
            "0335" => Self::Aia335,
            "211193171" => Self::AiaComposite,
            "hmi" => Self::HmiMagnetogram,
            "cor1" => Self::LascoC1,
            "cor2" => Self::LascoC2,
            _ => match policy {
                ChannelPolicy::Permissive if is_path_safe(code) => Self::Unlisted(code.to_owned()),
                _ => return Err(ViewerError::UnknownChannel(code.to_owned())),
            },
        };
        Ok(channel)
    }

    /// User-facing channels in menu order.
    #[must_use]
    pub fn selectable() -> &'static [Channel] {
        &MENU_ORDER
    }

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Aia94 => "0094",
            Self::Aia131 => "0131",
            Self::Aia171 => "0171",
            Self::Aia193 => "0193",
            Self::Aia211 => "0211",
            Self::Aia304 => "0304",
            Self::Aia335 => "0335",
            Self::AiaComposite => "211193171",
            Self::HmiMagnetogram => "hmi",
            Self::LascoC1 => "cor1",
            Self::LascoC2 => "cor2",
            Self::Unlisted(code) => code,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Aia94 => "SDO/AIA 94 A",
            Self::Aia131 => "SDO/AIA 131 A",
            Self::Aia171 => "SDO/AIA 171 A",
            Self::Aia193 => "SDO/AIA 193 A",
            Self::Aia211 => "SDO/AIA 211 A",
            Self::Aia304 => "SDO/AIA 304 A",
            Self::Aia335 => "SDO/AIA 335 A",
            Self::AiaComposite => "211+193+171A",
            Self::HmiMagnetogram => "SDO/HMI Magnetogram",
            Self::LascoC1 => "SOHO/LASCO Corona 1",
            Self::LascoC2 => "SOHO/LASCO Corona",
            Self::Unlisted(code) => code,
        }
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Self::LascoC1 | Self::Unlisted(_))
    }

    #[must_use]
    pub fn template(&self) -> PathTemplate {
        match self {
            Self::HmiMagnetogram => PathTemplate::Magnetogram,
            Self::LascoC1 => PathTemplate::Coronagraph { camera: 1 },
            Self::LascoC2 => PathTemplate::Coronagraph { camera: 2 },
            _ => PathTemplate::Wavelength,
        }
    }
}

// Unlisted codes and the imaging mode become path segments verbatim.
pub(crate) fn is_path_safe(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
