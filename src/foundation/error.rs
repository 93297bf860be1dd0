/// Convenience result type used across scrollcue.
pub type ScrollcueResult<T> = Result<T, ScrollcueError>;

/// Top-level error taxonomy used by coordinator APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollcueError {
    /// Invalid user-provided configuration, stage or trace data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating transition specs or phase windows.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl ScrollcueError {
    /// Build a [`ScrollcueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollcueError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollcueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollcueError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
