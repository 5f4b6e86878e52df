use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid timestamp input `{raw}`: {reason}")]
    InvalidInput { raw: String, reason: String },

    #[error("unknown channel code `{0}`")]
    UnknownChannel(String),

    #[error("channel `{0}` is not selectable")]
    ChannelNotSelectable(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("display error: {0}")]
    Display(String),
}
