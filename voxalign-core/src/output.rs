//! Result serialization.

use crate::types::{Generation, GenerationResult};
use serde::Serialize;
use std::io::Write;

/// Write the timestamp sidecar as pretty JSON with 2-space indentation.
pub fn write_sidecar(writer: impl Write, result: &GenerationResult) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, result)
}

/// Serialize a value as a single-line JSON object.
pub fn json_line(value: &impl Serialize) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Human-readable summary of a finished generation.
pub fn summary(generation: &Generation) -> String {
    format!(
        "Audio: {}\nTimestamps: {}\nDuration: {:.2}s\nWords: {}",
        generation.audio_path.display(),
        generation.timestamps_path.display(),
        generation.result.duration,
        generation.result.timestamps.len()
    )
}
