//! FFmpeg silence padding.

use crate::config::Padding;
use crate::error::PaddingError;
use crate::process;
use crate::traits::Padder;
use std::path::{Path, PathBuf};
use std::process::Command;

/// [FFmpeg](https://ffmpeg.org) applying `adelay` and `apad` to a WAV file.
#[derive(Clone, Debug)]
pub struct Ffmpeg {
    pub program: PathBuf,
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Ffmpeg {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, input: &Path, output: &Path, padding: Padding, sample_rate: u32) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-hide_banner", "-loglevel", "error", "-y"]);
        cmd.arg("-i").arg(input);
        cmd.arg("-af").arg(filter(padding));
        cmd.arg("-ar").arg(sample_rate.to_string());
        cmd.arg(output);
        cmd
    }
}

/// Filter graph delaying all channels by the start padding and appending the end padding.
pub fn filter(padding: Padding) -> String {
    format!(
        "adelay=delays={}:all=1,apad=pad_dur={:.3}",
        padding.start.as_millis(),
        padding.end.as_secs_f64()
    )
}

impl Padder for Ffmpeg {
    fn pad(
        &self,
        input: &Path,
        output: &Path,
        padding: Padding,
        sample_rate: u32,
    ) -> Result<(), PaddingError> {
        process::run(&mut self.command(input, output, padding, sample_rate), None)?;
        Ok(())
    }
}
