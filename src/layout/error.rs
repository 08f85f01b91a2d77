//! Error types for the layout boundary

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while invoking the external layout engine
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The engine binary could not be resolved on PATH
    #[error("layout engine '{engine}' not found on PATH")]
    EngineNotFound {
        engine: String,
        #[source]
        source: which::Error,
    },

    /// The engine process could not be started
    #[error("failed to spawn layout engine '{engine}': {source}")]
    Spawn {
        engine: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine rejected the input (malformed DOT source, render failure)
    #[error("layout engine '{engine}' exited with {status}: {stderr}")]
    Render {
        engine: String,
        status: ExitStatus,
        stderr: String,
    },

    /// An image entry cannot be forwarded to the engine
    #[error("invalid layout image '{path}': {reason}")]
    InvalidImage { path: String, reason: String },

    /// I/O failure while streaming to or from the engine
    #[error("layout engine I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_image_display() {
        let err = LayoutError::InvalidImage {
            path: "data:image/png;base64,AAAA".to_string(),
            reason: "not a relative file path".to_string(),
        };
        assert!(err.to_string().contains("data:image/png"));
        assert!(err.to_string().contains("relative"));
    }
}
