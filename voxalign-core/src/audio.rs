//! WAV header inspection.

use hound::{WavReader, WavSpec};
use std::path::Path;

/// Summary of a WAV file read from its header.
#[derive(Clone, Copy, Debug)]
pub struct WavInfo {
    pub spec: WavSpec,
    /// Samples per channel
    pub frames: u32,
}

impl WavInfo {
    /// Read the header of the WAV file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> hound::Result<Self> {
        let reader = WavReader::open(path)?;
        Ok(Self {
            spec: reader.spec(),
            frames: reader.duration(),
        })
    }

    /// Length of the audio in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames as f64 / self.spec.sample_rate as f64
    }

    pub(crate) fn log(&self, path: &Path, stage: &str) {
        tracing::debug!(
            path = %path.display(),
            duration = format!("{:.2}s", self.duration_secs()),
            channels = self.spec.channels,
            sample_rate = self.spec.sample_rate,
            bits_per_sample = self.spec.bits_per_sample,
            format = ?self.spec.sample_format,
            "{stage} wav spec"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavWriter};

    #[test]
    fn reads_spec_and_duration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        let spec = WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for _ in 0..11025 {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();

        let info = WavInfo::from_file(&path).unwrap();
        assert_eq!(info.spec.sample_rate, 22050);
        assert_eq!(info.frames, 11025);
        assert!((info.duration_secs() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not.wav");
        std::fs::write(&path, "plain text").unwrap();

        assert!(WavInfo::from_file(&path).is_err());
    }
}
