/// Core error types for the Trailcast engine.
use std::path::PathBuf;

/// A specialized Result type for Trailcast operations.
pub type TrailcastResult<T> = Result<T, TrailcastError>;

/// Top-level error type encompassing all Trailcast subsystems.
#[derive(Debug, thiserror::Error)]
pub enum TrailcastError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid track data: {0}")]
    Track(String),

    #[error("plugin '{plugin}' failed in the background pass: {message}")]
    BackgroundPass { plugin: String, message: String },

    #[error("plugin '{plugin}' failed on frame {frame}: {message}")]
    FramePass {
        plugin: String,
        frame: u64,
        message: String,
    },

    #[error("asset error: {message} ({path:?})")]
    Asset { message: String, path: PathBuf },

    #[error("frame sink error: {0}")]
    Sink(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrailcastError {
    /// Create an asset error.
    pub fn asset(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        TrailcastError::Asset {
            message: message.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_pass_display() {
        let err = TrailcastError::FramePass {
            plugin: "marker".to_string(),
            frame: 42,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "plugin 'marker' failed on frame 42: boom");
    }

    #[test]
    fn test_asset_error_display() {
        let err = TrailcastError::asset("file not found", "/assets/logo.png");
        assert!(err.to_string().contains("file not found"));
    }
}
