//! Core traits for the external tools driven by the pipeline.
//!
//! Each tool is a black box invoked as a subprocess. The traits keep the
//! pipeline independent of the concrete programs so tests can substitute fakes.

use crate::config::Padding;
use crate::error::{AlignmentError, PaddingError, ToolError};
use crate::types::TimedWord;
use std::path::Path;

/// Text-to-speech engine producing an unpadded WAV file.
pub trait Synthesizer {
    /// Speak `text` with the voice model at `model`, writing audio to `output`.
    fn synthesize(&self, text: &str, model: &Path, output: &Path) -> Result<(), ToolError>;
}

/// Forced aligner mapping transcript words to time spans in a recording.
pub trait Aligner {
    /// Align `transcript` against the audio at `audio`.
    ///
    /// Returns raw word timestamps in order of appearance.
    fn align(&self, audio: &Path, transcript: &str) -> Result<Vec<TimedWord>, AlignmentError>;
}

/// Audio filter adding silence around a recording.
pub trait Padder {
    /// Write `input` to `output` with `padding` silence, resampled to `sample_rate`.
    fn pad(
        &self,
        input: &Path,
        output: &Path,
        padding: Padding,
        sample_rate: u32,
    ) -> Result<(), PaddingError>;
}

impl<T: Synthesizer + ?Sized> Synthesizer for &T {
    fn synthesize(&self, text: &str, model: &Path, output: &Path) -> Result<(), ToolError> {
        (**self).synthesize(text, model, output)
    }
}

impl<T: Aligner + ?Sized> Aligner for &T {
    fn align(&self, audio: &Path, transcript: &str) -> Result<Vec<TimedWord>, AlignmentError> {
        (**self).align(audio, transcript)
    }
}

impl<T: Padder + ?Sized> Padder for &T {
    fn pad(
        &self,
        input: &Path,
        output: &Path,
        padding: Padding,
        sample_rate: u32,
    ) -> Result<(), PaddingError> {
        (**self).pad(input, output, padding, sample_rate)
    }
}
