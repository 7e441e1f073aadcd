//! CLI argument definitions using clap.

use clap::Parser;
use clap::error::ErrorKind;
use eyre::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use voxalign_core::config::{DEFAULT_VOICE, PAD_END_MS, PAD_START_MS, SAMPLE_RATE};

#[derive(Debug, Parser)]
#[command(name = "voxalign")]
#[command(about = "Generate speech audio with word-level timestamps")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output path without extension; creates <OUTPUT>.wav and <OUTPUT>.json
    #[arg(short, long)]
    pub output: PathBuf,

    /// Only print a single-line JSON result to stdout (for programmatic use)
    #[arg(long)]
    pub json_only: bool,

    #[command(flatten)]
    pub voice: VoiceArgs,

    #[command(flatten)]
    pub tools: ToolArgs,

    #[command(flatten)]
    pub audio: AudioArgs,
}

/// Text source, exactly one required.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Text to convert to speech
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Input file containing text
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Where to look for the voice model.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum ModelSource {
    /// Model directory if the model is there, otherwise download
    #[default]
    Auto,
    /// Model directory only
    Path,
    /// Hugging Face cache only
    Cache,
    /// Download from the Hugging Face Hub
    Api,
}

/// Voice model selection.
#[derive(clap::Args, Debug)]
pub struct VoiceArgs {
    /// Piper voice identifier
    #[arg(long, env = "VOXALIGN_VOICE", default_value = DEFAULT_VOICE)]
    pub voice: String,

    /// Voice model file, skipping model lookup
    #[arg(long, env = "VOXALIGN_MODEL")]
    pub model: Option<PathBuf>,

    /// Directory containing voice models (default: <data dir>/voxalign/models)
    #[arg(long, env = "VOXALIGN_MODEL_DIR")]
    pub model_dir: Option<PathBuf>,

    /// Voice model source
    #[arg(long, value_enum, default_value_t = ModelSource::Auto)]
    pub model_source: ModelSource,
}

/// External programs.
#[derive(clap::Args, Debug)]
pub struct ToolArgs {
    /// Piper executable
    #[arg(long, env = "VOXALIGN_PIPER", default_value = "piper")]
    pub piper: PathBuf,

    /// Forced aligner executable printing JSON word timings
    #[arg(long, env = "VOXALIGN_ALIGNER", default_value = "forcealign-json")]
    pub aligner: PathBuf,

    /// Extra argument passed to the aligner before the audio path (repeatable)
    #[arg(long = "aligner-arg", allow_hyphen_values = true)]
    pub aligner_args: Vec<String>,

    /// FFmpeg executable
    #[arg(long, env = "VOXALIGN_FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,
}

/// Output audio settings.
#[derive(clap::Args, Debug)]
pub struct AudioArgs {
    /// Silence before speech in milliseconds
    #[arg(long, default_value_t = PAD_START_MS)]
    pub pad_start_ms: u64,

    /// Silence after speech in milliseconds
    #[arg(long, default_value_t = PAD_END_MS)]
    pub pad_end_ms: u64,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Directory for intermediate audio (default: system temp directory)
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::generate::execute(cli.try_into()?)
}

/// Print a failed run's error in the requested format.
pub fn report_error(err: &eyre::Report, json_only: bool) {
    if json_only {
        println!("{}", error_line(&format!("{err:#}")));
    } else {
        eprintln!("Error: {err:?}");
    }
}

/// Handle an argument parsing failure, returning the process exit code.
///
/// Help and version requests succeed; everything else exits with 1.
pub fn report_usage(err: clap::Error, json_only: bool) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print().ok();
            ExitCode::SUCCESS
        }
        _ if json_only => {
            println!("{}", error_line(err.render().to_string().trim()));
            ExitCode::FAILURE
        }
        _ => {
            err.print().ok();
            ExitCode::FAILURE
        }
    }
}

/// `{"error": <message>}` on one line.
fn error_line(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
