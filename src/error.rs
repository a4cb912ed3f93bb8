//! Crate-level error types.

use std::fmt;

#[cfg(feature = "viewer")]
use crate::gpu::render_context::RenderContextError;

/// Errors produced by the tumble crate.
///
/// Controller input handling is infallible; these cover the edges where
/// the crate touches the filesystem, the GPU, or a windowing event loop.
#[derive(Debug)]
pub enum TumbleError {
    /// GPU context initialization failure.
    #[cfg(feature = "viewer")]
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable controller.
    InvalidOptions(String),
    /// Viewer event-loop failure.
    #[cfg(feature = "viewer")]
    Viewer(String),
}

impl fmt::Display for TumbleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            #[cfg(feature = "viewer")]
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TumbleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<RenderContextError> for TumbleError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for TumbleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_names_the_failing_layer() {
        let err = TumbleError::InvalidOptions("zoom_min > zoom_max".into());
        assert_eq!(err.to_string(), "invalid options: zoom_min > zoom_max");

        let err = TumbleError::OptionsParse("expected `=`".into());
        assert!(err.to_string().starts_with("options parse error"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = TumbleError::from(io);
        assert!(matches!(err, TumbleError::Io(_)));
        assert!(err.source().is_some());
        assert!(TumbleError::OptionsParse(String::new()).source().is_none());
    }
}
