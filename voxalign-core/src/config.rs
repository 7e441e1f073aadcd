//! Pipeline configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default Piper voice identifier.
pub const DEFAULT_VOICE: &str = "en_US-lessac-medium";

/// Output sample rate of the padded audio (22.05kHz).
pub const SAMPLE_RATE: u32 = 22050;

/// Default silence before speech in milliseconds.
pub const PAD_START_MS: u64 = 150;

/// Default silence after speech in milliseconds.
pub const PAD_END_MS: u64 = 250;

/// Silence added around the synthesized speech.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub start: Duration,
    pub end: Duration,
}

impl Default for Padding {
    fn default() -> Self {
        Self::from_millis(PAD_START_MS, PAD_END_MS)
    }
}

impl Padding {
    pub fn new(start: Duration, end: Duration) -> Self {
        Self { start, end }
    }

    pub fn from_millis(start_ms: u64, end_ms: u64) -> Self {
        Self::new(Duration::from_millis(start_ms), Duration::from_millis(end_ms))
    }
}

/// Voice model used for synthesis.
#[derive(Clone, Debug)]
pub struct VoiceModel {
    /// Voice identifier (e.g. `en_US-lessac-medium`)
    pub id: String,
    /// Path to the `.onnx` model file
    pub path: PathBuf,
}

/// Resolved pipeline configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub voice: VoiceModel,
    pub padding: Padding,
    pub sample_rate: u32,
    /// Directory for the raw synthesis output (default: system temp dir)
    pub temp_dir: Option<PathBuf>,
}

impl Config {
    /// Configuration with default padding and sample rate.
    pub fn new(voice: VoiceModel) -> Self {
        Self {
            voice,
            padding: Padding::default(),
            sample_rate: SAMPLE_RATE,
            temp_dir: None,
        }
    }
}
