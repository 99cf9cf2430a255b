/// Convenience alias for results produced by this crate.
pub type NexusResult<T> = Result<T, NexusError>;

/// Error type for configuration parsing and rendering.
#[derive(thiserror::Error, Debug)]
pub enum NexusError {
    /// A boundary value failed validation (bad canvas size, malformed config shape).
    #[error("validation error: {0}")]
    Validation(String),

    /// A rendering step could not produce pixels (surface or paint construction).
    #[error("render error: {0}")]
    Render(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NexusError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub(crate) fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
