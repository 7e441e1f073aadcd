//! Error types for voxalign-core organized by pipeline stage.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Text source arguments were missing or conflicting
    #[error("usage error: {0}")]
    Usage(String),

    /// Input text was empty after trimming whitespace
    #[error("empty text provided")]
    EmptyInput,

    /// Speech synthesis stage error
    #[error("speech synthesis failed")]
    Synthesis(#[source] ToolError),

    /// Forced alignment stage error
    #[error("forced alignment failed")]
    Alignment(#[from] AlignmentError),

    /// Silence padding stage error
    #[error("audio padding failed")]
    Padding(#[from] PaddingError),

    /// File read or write error
    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// External program invocation errors.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Program could not be started
    #[error("failed to run {program:?}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Program exited unsuccessfully
    #[error("{program:?} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// IO error while talking to the program
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Forced alignment errors.
#[derive(Debug, Error)]
pub enum AlignmentError {
    /// Aligner invocation failed
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Aligner output was not a JSON word list
    #[error("invalid aligner output")]
    Parse(#[from] serde_json::Error),

    /// Aligner returned no words for a non-empty transcript
    #[error("aligner returned no words")]
    Empty,

    /// Word span is negative, inverted or not finite
    #[error("invalid span for word {index} {word:?}: {start}s..{end}s")]
    InvalidSpan {
        index: usize,
        word: String,
        start: f64,
        end: f64,
    },

    /// Word starts before the previous word
    #[error("word {index} {word:?} starts at {start}s before previous start {previous}s")]
    OutOfOrder {
        index: usize,
        word: String,
        start: f64,
        previous: f64,
    },
}

/// Silence padding errors.
#[derive(Debug, Error)]
pub enum PaddingError {
    /// FFmpeg invocation failed
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Padded output sample rate does not match the configured rate
    #[error("invalid sample rate: expected {expected}Hz, got {got}Hz")]
    InvalidSampleRate { expected: u32, got: u32 },

    /// Padded output is not a readable WAV file
    #[error(transparent)]
    Hound(#[from] hound::Error),
}

/// Result type alias for voxalign-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an IO error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn alignment_error_keeps_tool_message_as_source() {
        let tool = ToolError::Io(std::io::Error::other("broken pipe"));
        let err = Error::from(AlignmentError::from(tool));

        assert_eq!(err.to_string(), "forced alignment failed");
        let source = err.source().expect("alignment error should have a source");
        assert_eq!(source.to_string(), "broken pipe");
    }

    #[test]
    fn io_error_names_path() {
        let err = Error::io("missing.txt", std::io::Error::other("not found"));
        assert_eq!(err.to_string(), "failed to access \"missing.txt\"");
    }
}
