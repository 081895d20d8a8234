/// Crate-wide result alias.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Errors produced while configuring, rendering, or encoding an overlay.
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    /// Canvas dimensions are zero, above the configured maximum, or not a finite number.
    #[error("invalid dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested width (as given, before any rounding).
        width: f64,
        /// Requested height (as given, before any rounding).
        height: f64,
    },

    /// Overlay configuration failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// Request body could not be interpreted.
    #[error("request error: {0}")]
    Request(String),

    /// PNG (or base64) encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Reference image header could not be read.
    #[error("probe error: {0}")]
    Probe(String),

    /// Anything else, usually an IO error with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverlayError {
    /// Build an [`OverlayError::InvalidDimension`] from integer or float dimensions.
    pub fn invalid_dimension(width: impl Into<f64>, height: impl Into<f64>) -> Self {
        Self::InvalidDimension {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Build an [`OverlayError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`OverlayError::Request`].
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Build an [`OverlayError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`OverlayError::Probe`].
    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
