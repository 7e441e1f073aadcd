//! Generate speech audio and word timestamps for a text.

use crate::config::Config;
use color_eyre::Section;
use eyre::{Report, Result};
use std::time::Instant;
use voxalign_core::config::{self as core_config, VoiceModel};
use voxalign_core::error::{AlignmentError, Error, PaddingError, ToolError};
use voxalign_core::input;
use voxalign_core::output;
use voxalign_core::pipeline::Pipeline;

pub fn execute(config: Config) -> Result<()> {
    let text = config.source.read()?;

    // Reject blank text before touching the network or any tool.
    input::normalize(&text)?;

    let model_path = config.voice.resolve()?;

    let pipeline_config = core_config::Config {
        voice: VoiceModel {
            id: config.voice.id.to_string(),
            path: model_path,
        },
        padding: config.audio.padding,
        sample_rate: config.audio.sample_rate,
        temp_dir: config.audio.temp_dir,
    };

    tracing::info!(
        output = ?config.output.display(),
        model = ?pipeline_config.voice.path.display(),
        "generating speech"
    );

    let tools = config.tools;
    let pipeline = Pipeline::new(pipeline_config, tools.piper, tools.aligner, tools.ffmpeg);

    let s = Instant::now();

    let generation = pipeline
        .generate(&text, &config.output)
        .map_err(with_suggestion)?;

    let d = s.elapsed();
    tracing::info!(duration = %format_secs(d.as_secs_f32()), "generation completed");

    if config.json_only {
        println!("{}", output::json_line(&generation)?);
    } else {
        println!("{}", output::summary(&generation));
    }

    Ok(())
}

/// Attach a hint for failures the user can fix from the command line.
fn with_suggestion(err: Error) -> Report {
    let suggestion = match &err {
        Error::Synthesis(ToolError::Spawn { .. }) => {
            Some("install piper or point --piper at its executable")
        }
        Error::Alignment(AlignmentError::Tool(ToolError::Spawn { .. })) => {
            Some("install an aligner printing JSON word timings (see scripts/forcealign-json) and pass --aligner")
        }
        Error::Alignment(AlignmentError::Parse(_)) => {
            Some("the aligner must print a JSON array of {\"word\", \"start\", \"end\"} objects")
        }
        Error::Padding(PaddingError::Tool(ToolError::Spawn { .. })) => {
            Some("install ffmpeg or point --ffmpeg at its executable")
        }
        _ => None,
    };

    let report = Report::new(err);
    match suggestion {
        Some(suggestion) => report.suggestion(suggestion),
        None => report,
    }
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}
