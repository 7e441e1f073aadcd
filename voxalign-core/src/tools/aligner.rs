//! Forced aligner speaking a JSON word list on stdout.

use crate::error::AlignmentError;
use crate::process;
use crate::traits::Aligner;
use crate::types::TimedWord;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Aligner invoked as `<program> [args...] <wav>` with the transcript on stdin.
///
/// The program prints `[{"word": ..., "start": ..., "end": ...}, ...]` with
/// times in seconds relative to the start of the recording.
#[derive(Clone, Debug)]
pub struct CommandAligner {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Default for CommandAligner {
    fn default() -> Self {
        Self::new("forcealign-json")
    }
}

impl CommandAligner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments placed before the audio path.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn command(&self, audio: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(audio);
        cmd
    }
}

impl Aligner for CommandAligner {
    fn align(&self, audio: &Path, transcript: &str) -> Result<Vec<TimedWord>, AlignmentError> {
        let output = process::run(&mut self.command(audio), Some(transcript.as_bytes()))?;
        parse_words(&output.stdout)
    }
}

/// Parse aligner stdout into raw word timestamps.
pub(crate) fn parse_words(stdout: &[u8]) -> Result<Vec<TimedWord>, AlignmentError> {
    Ok(serde_json::from_slice(stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_list() {
        let stdout = br#"[
            {"word": "Hello", "start": 0.02, "end": 0.46},
            {"word": "world", "start": 0.5, "end": 0.9}
        ]"#;

        let words = parse_words(stdout).unwrap();
        assert_eq!(
            words,
            [
                TimedWord::new("Hello", 0.02, 0.46),
                TimedWord::new("world", 0.5, 0.9),
            ]
        );
    }

    #[test]
    fn rejects_malformed_output() {
        let result = parse_words(b"Traceback (most recent call last):");
        assert!(matches!(result, Err(AlignmentError::Parse(_))));
    }

    #[test]
    fn rejects_missing_fields() {
        let result = parse_words(br#"[{"word": "Hello", "start": 0.1}]"#);
        assert!(matches!(result, Err(AlignmentError::Parse(_))));
    }

    #[test]
    fn places_extra_args_before_audio() {
        let aligner = CommandAligner::new("python3").with_args(["-m", "forcealign_json"]);
        let cmd = aligner.command(Path::new("raw.wav"));

        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["-m", "forcealign_json", "raw.wav"]);
    }

    #[cfg(unix)]
    #[test]
    fn reads_transcript_from_stdin() {
        // Echo each stdin word back with a fixed span.
        let script = r#"tr ' ' '\n' | awk 'BEGIN { printf "[" } { if (NR > 1) printf ","; printf "{\"word\":\"%s\",\"start\":%d,\"end\":%d}", $0, NR - 1, NR } END { print "]" }'"#;
        let aligner = CommandAligner::new("sh").with_args(["-c", script, "aligner"]);

        let words = aligner.align(Path::new("raw.wav"), "Hello world").unwrap();
        assert_eq!(
            words,
            [
                TimedWord::new("Hello", 0.0, 1.0),
                TimedWord::new("world", 1.0, 2.0),
            ]
        );
    }
}
