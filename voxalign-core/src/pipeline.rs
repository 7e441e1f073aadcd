//! Text-to-speech pipeline: synthesis, alignment, padding and result writing.

use crate::audio::WavInfo;
use crate::config::Config;
use crate::error::{Error, PaddingError, Result};
use crate::input;
use crate::output;
use crate::timing;
use crate::tools::{CommandAligner, Ffmpeg, Piper};
use crate::traits::{Aligner, Padder, Synthesizer};
use crate::types::{Generation, GenerationResult};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::{Builder, TempPath};

/// Pipeline backed by Piper, a JSON word aligner and FFmpeg.
pub type DefaultPipeline = Pipeline<Piper, CommandAligner, Ffmpeg>;

/// Sequential generation pipeline over three external tools.
#[derive(Debug)]
pub struct Pipeline<S, A, P> {
    pub config: Config,
    synthesizer: S,
    aligner: A,
    padder: P,
}

impl<S, A, P> Pipeline<S, A, P>
where
    S: Synthesizer,
    A: Aligner,
    P: Padder,
{
    pub fn new(config: Config, synthesizer: S, aligner: A, padder: P) -> Self {
        Self {
            config,
            synthesizer,
            aligner,
            padder,
        }
    }

    /// Generate `<base>.wav` and `<base>.json` for `text`.
    ///
    /// Text is trimmed first; empty text fails before any tool runs. Both files
    /// appear only if every stage succeeds. The raw synthesis output is removed
    /// on every path.
    pub fn generate(&self, text: &str, base: &Path) -> Result<Generation> {
        let text = input::normalize(text)?;

        let audio_path = base.with_extension("wav");
        let timestamps_path = base.with_extension("json");
        let output_dir = parent_dir(base);

        std::fs::create_dir_all(&output_dir).map_err(|e| Error::io(&output_dir, e))?;

        let raw = self.raw_audio_path()?;

        tracing::info!(
            voice = %self.config.voice.id,
            chars = text.chars().count(),
            "synthesizing speech"
        );
        let s = Instant::now();

        self.synthesizer
            .synthesize(text, &self.config.voice.path, &raw)
            .map_err(Error::Synthesis)?;

        tracing::info!(duration = %format_secs(s.elapsed().as_secs_f32()), "speech synthesized");

        match WavInfo::from_file(&raw) {
            Ok(info) => info.log(&raw, "raw"),
            Err(e) => tracing::debug!(error = %e, "failed to read raw audio header"),
        }

        tracing::info!("aligning words");
        let s = Instant::now();

        let words = self.aligner.align(&raw, text)?;
        timing::validate(&words)?;

        tracing::info!(
            duration = %format_secs(s.elapsed().as_secs_f32()),
            aligned = words.len(),
            "words aligned"
        );

        let expected = text.split_whitespace().count();
        if words.len() != expected {
            tracing::warn!(
                aligned = words.len(),
                expected,
                "aligned word count differs from transcript"
            );
        }

        let padding = self.config.padding;
        let timestamps = timing::shift(words, padding.start);
        let duration = timing::total_duration(&timestamps, padding.end);

        tracing::info!(
            start = ?padding.start,
            end = ?padding.end,
            sample_rate = self.config.sample_rate,
            "padding audio"
        );

        let staged_audio = stage(&output_dir, ".wav")?.into_temp_path();

        self.padder
            .pad(&raw, &staged_audio, padding, self.config.sample_rate)?;
        self.verify_padded(&staged_audio)?;

        if let Err(e) = raw.close() {
            tracing::warn!(error = %e, "failed to remove raw audio");
        }

        let result = GenerationResult {
            text: text.to_string(),
            timestamps,
            duration,
        };

        let mut staged_json = stage(&output_dir, ".json")?;
        let json_path = staged_json.path().to_path_buf();
        let mut writer = BufWriter::new(staged_json.as_file_mut());
        output::write_sidecar(&mut writer, &result)?;
        writer.flush().map_err(|e| Error::io(json_path, e))?;
        drop(writer);

        publish(staged_audio, staged_json, &audio_path, &timestamps_path)?;

        tracing::info!(
            audio = %audio_path.display(),
            timestamps = %timestamps_path.display(),
            "outputs written"
        );

        Ok(Generation {
            audio_path,
            timestamps_path,
            result,
        })
    }

    /// Reserve the temporary file Piper writes to, removed when dropped.
    fn raw_audio_path(&self) -> Result<TempPath> {
        let mut builder = Builder::new();
        builder.prefix("voxalign-raw-").suffix(".wav");

        let file = match &self.config.temp_dir {
            Some(dir) => builder.tempfile_in(dir).map_err(|e| Error::io(dir, e))?,
            None => builder
                .tempfile()
                .map_err(|e| Error::io(std::env::temp_dir(), e))?,
        };

        Ok(file.into_temp_path())
    }

    fn verify_padded(&self, path: &Path) -> std::result::Result<(), PaddingError> {
        let info = WavInfo::from_file(path)?;
        info.log(path, "padded");

        let expected = self.config.sample_rate;
        if info.spec.sample_rate != expected {
            return Err(PaddingError::InvalidSampleRate {
                expected,
                got: info.spec.sample_rate,
            });
        }

        Ok(())
    }
}

impl DefaultPipeline {
    /// Pipeline using `piper`, `forcealign-json` and `ffmpeg` from `PATH`.
    pub fn with_default_tools(config: Config) -> Self {
        Self::new(
            config,
            Piper::default(),
            CommandAligner::default(),
            Ffmpeg::default(),
        )
    }
}

/// Directory holding the output files.
fn parent_dir(base: &Path) -> PathBuf {
    match base.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Hidden temporary file next to the outputs so publishing is a rename.
fn stage(dir: &Path, suffix: &str) -> Result<tempfile::NamedTempFile> {
    Builder::new()
        .prefix(".voxalign-")
        .suffix(suffix)
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))
}

/// Move staged files to their final names, never leaving the audio without its sidecar.
fn publish(
    audio: TempPath,
    json: tempfile::NamedTempFile,
    audio_path: &Path,
    timestamps_path: &Path,
) -> Result<()> {
    audio
        .persist(audio_path)
        .map_err(|e| Error::io(audio_path, e.error))?;

    if let Err(e) = json.persist(timestamps_path) {
        std::fs::remove_file(audio_path).ok();
        return Err(Error::io(timestamps_path, e.error));
    }

    Ok(())
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}
