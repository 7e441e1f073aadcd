//! Core types for voxalign-core

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word with timestamps.
///
/// Represents one aligned word with start and end times in seconds.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TimedWord {
    /// Word as reported by the aligner
    pub word: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl TimedWord {
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }
}

/// Text, adjusted word timestamps and total duration of one generated utterance.
///
/// Field order is the serialized key order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GenerationResult {
    pub text: String,
    pub timestamps: Vec<TimedWord>,
    pub duration: f64,
}

/// A generation result together with the artifacts written for it.
#[derive(Clone, Debug, Serialize)]
pub struct Generation {
    pub audio_path: PathBuf,
    pub timestamps_path: PathBuf,
    #[serde(flatten)]
    pub result: GenerationResult,
}
