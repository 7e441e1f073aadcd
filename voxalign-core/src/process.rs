//! Blocking subprocess invocation with captured output.

use crate::error::ToolError;
use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

/// Run a command to completion, feeding `stdin` and capturing stdout and stderr.
///
/// A non-zero exit status becomes [`ToolError::Failed`] carrying the trimmed stderr.
pub fn run(command: &mut Command, stdin: Option<&[u8]>) -> Result<Output, ToolError> {
    let program = command.get_program().to_string_lossy().into_owned();

    tracing::debug!(
        program,
        args = ?command.get_args().collect::<Vec<_>>(),
        "running external tool"
    );

    command
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|source| ToolError::Spawn {
        program: program.clone(),
        source,
    })?;

    // Feed stdin from a scoped thread so a child filling its output pipes
    // cannot block on us while we block on it.
    let output = std::thread::scope(|s| -> std::io::Result<Output> {
        let writer = child.stdin.take().map(|mut pipe| {
            let input = stdin.unwrap_or_default();
            s.spawn(move || pipe.write_all(input))
        });

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Err(e)) if e.kind() != ErrorKind::BrokenPipe => return Err(e),
                Ok(_) => {}
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        Ok(output)
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ToolError::Failed {
            program,
            status: output.status,
            stderr,
        });
    }

    Ok(output)
}
