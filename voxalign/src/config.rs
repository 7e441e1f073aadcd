//! Configuration types for resolved CLI arguments.
//!
//! This module contains Config structs and their TryFrom implementations.
//! Args structs (for CLI parsing) remain in cli.rs.

use crate::cli::{AudioArgs, Cli, ModelSource, ToolArgs, VoiceArgs};
use crate::voice::{ModelRepo, VOICES_REPO, VoiceId};
use eyre::{OptionExt, Result};
use hf_hub::Cache;
use hf_hub::api::sync::Api;
use std::path::PathBuf;
use voxalign_core::config::Padding;
use voxalign_core::input::TextSource;
use voxalign_core::tools::{CommandAligner, Ffmpeg, Piper};

/// Resolved voice configuration.
///
/// Converted from VoiceArgs via TryFrom.
/// The model file itself is located lazily by [`VoiceConfig::resolve`].
#[derive(Debug)]
pub struct VoiceConfig {
    pub id: VoiceId,
    pub repo: ModelRepo,
}

impl VoiceConfig {
    /// Locate the model file, downloading it if the source requires.
    pub fn resolve(&self) -> Result<PathBuf> {
        tracing::info!(voice = %self.id, "locating voice model");
        self.repo.resolve(&self.id)
    }
}

impl TryFrom<VoiceArgs> for VoiceConfig {
    type Error = eyre::Error;

    fn try_from(args: VoiceArgs) -> Result<Self> {
        let id: VoiceId = args.voice.parse()?;

        if let Some(model) = args.model {
            return Ok(Self {
                id,
                repo: ModelRepo::File(model),
            });
        }

        let repo = match args.model_source {
            ModelSource::Auto => {
                let dir = model_dir(args.model_dir)?;
                if dir.join(id.model_file()).is_file() {
                    ModelRepo::Path(dir)
                } else {
                    ModelRepo::Api(Api::new()?.model(VOICES_REPO.to_string()))
                }
            }
            ModelSource::Path => ModelRepo::Path(model_dir(args.model_dir)?),
            ModelSource::Cache => {
                ModelRepo::Cache(Cache::from_env().model(VOICES_REPO.to_string()))
            }
            ModelSource::Api => ModelRepo::Api(Api::new()?.model(VOICES_REPO.to_string())),
        };

        Ok(Self { id, repo })
    }
}

/// Model directory from the argument or the platform data directory.
fn model_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|dir| dir.join("voxalign").join("models"))
            .ok_or_eyre("failed to get data directory, pass --model-dir"),
    }
}

/// External programs used by the pipeline.
#[derive(Debug)]
pub struct Tools {
    pub piper: Piper,
    pub aligner: CommandAligner,
    pub ffmpeg: Ffmpeg,
}

impl From<ToolArgs> for Tools {
    fn from(args: ToolArgs) -> Self {
        Self {
            piper: Piper::new(args.piper),
            aligner: CommandAligner::new(args.aligner).with_args(args.aligner_args),
            ffmpeg: Ffmpeg::new(args.ffmpeg),
        }
    }
}

/// Resolved output audio settings.
#[derive(Debug)]
pub struct AudioConfig {
    pub padding: Padding,
    pub sample_rate: u32,
    pub temp_dir: Option<PathBuf>,
}

impl From<AudioArgs> for AudioConfig {
    fn from(args: AudioArgs) -> Self {
        Self {
            padding: Padding::from_millis(args.pad_start_ms, args.pad_end_ms),
            sample_rate: args.sample_rate,
            temp_dir: args.temp_dir,
        }
    }
}

/// Resolved configuration for a generation run.
#[derive(Debug)]
pub struct Config {
    pub source: TextSource,
    pub output: PathBuf,
    pub json_only: bool,
    pub voice: VoiceConfig,
    pub tools: Tools,
    pub audio: AudioConfig,
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            source: TextSource::from_args(cli.input.text, cli.input.input)?,
            output: cli.output,
            json_only: cli.json_only,
            voice: cli.voice.try_into()?,
            tools: cli.tools.into(),
            audio: cli.audio.into(),
        })
    }
}
