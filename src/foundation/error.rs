/// Convenience result type used across the crate.
pub type EpicycleResult<T> = Result<T, EpicycleError>;

/// Top-level error taxonomy used by sampling and decomposition APIs.
#[derive(thiserror::Error, Debug)]
pub enum EpicycleError {
    /// The source text holds no extractable path description.
    #[error("no path found: {0}")]
    NoPath(String),

    /// Malformed path data. `offset` is a byte offset into the path string.
    #[error("parse error at byte {offset} near '{token}': {message}")]
    Parse {
        /// Byte offset of the offending token.
        offset: usize,
        /// The offending token text (may be empty at end of input).
        token: String,
        /// Human-readable reason.
        message: String,
    },

    /// Invalid configuration or input that cannot be decomposed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration or results.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EpicycleError {
    /// Build a [`EpicycleError::NoPath`] value.
    pub fn no_path(msg: impl Into<String>) -> Self {
        Self::NoPath(msg.into())
    }

    /// Build a [`EpicycleError::Parse`] value.
    pub fn parse(offset: usize, token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            token: token.into(),
            message: message.into(),
        }
    }

    /// Build a [`EpicycleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EpicycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
