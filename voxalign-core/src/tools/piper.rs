//! Piper text-to-speech.

use crate::error::ToolError;
use crate::process;
use crate::traits::Synthesizer;
use std::path::{Path, PathBuf};
use std::process::Command;

/// [Piper](https://github.com/rhasspy/piper) invoked as
/// `piper --model <model> --output_file <wav>` with text on stdin.
#[derive(Clone, Debug)]
pub struct Piper {
    pub program: PathBuf,
}

impl Default for Piper {
    fn default() -> Self {
        Self::new("piper")
    }
}

impl Piper {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, model: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--model").arg(model);
        cmd.arg("--output_file").arg(output);
        cmd
    }
}

impl Synthesizer for Piper {
    fn synthesize(&self, text: &str, model: &Path, output: &Path) -> Result<(), ToolError> {
        process::run(&mut self.command(model, output), Some(text.as_bytes()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_piper_arguments() {
        let piper = Piper::default();
        let cmd = piper.command(Path::new("voice.onnx"), Path::new("/tmp/raw.wav"));

        assert_eq!(cmd.get_program(), "piper");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(
            args,
            ["--model", "voice.onnx", "--output_file", "/tmp/raw.wav"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn surfaces_piper_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("piper");
        std::fs::write(&program, "#!/bin/sh\necho 'Unable to load model' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = Piper::new(&program)
            .synthesize("Hello", Path::new("voice.onnx"), &dir.path().join("out.wav"))
            .unwrap_err();

        assert!(err.to_string().contains("Unable to load model"), "{err}");
    }
}
