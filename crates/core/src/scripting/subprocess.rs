//! Shared subprocess management.
//!
//! Provides [`run_command`], the spawn + capture logic used by every
//! executor. Each executor builds a [`tokio::process::Command`] for its
//! runtime and delegates the rest here.

use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::executor::{ScriptError, ScriptOutput};

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Output beyond this limit is read and discarded so the child never sees a
/// closed pipe.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Spawn `cmd`, capture stdout/stderr, and wait for it to exit.
///
/// The child gets no stdin. The wait is unbounded: a script that never
/// exits keeps the caller waiting. The exit code is reported but not
/// interpreted.
pub async fn run_command(cmd: &mut Command) -> Result<ScriptOutput, ScriptError> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let start = Instant::now();

    let mut child = cmd.spawn().map_err(ScriptError::IoError)?;

    // Drain both pipes concurrently so a chatty stderr cannot block stdout.
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    let status = child.wait().await.map_err(ScriptError::IoError)?;

    let duration_ms = start.elapsed().as_millis() as u64;
    let stdout_bytes = stdout_task.await.unwrap_or_default();
    let stderr_bytes = stderr_task.await.unwrap_or_default();

    Ok(ScriptOutput {
        stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
        stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
        exit_code: status.code(),
        duration_ms,
    })
}

/// Read an output stream to EOF, keeping the first [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
        // Keep the pipe open until the child closes it.
        let _ = tokio::io::copy(&mut h, &mut tokio::io::sink()).await;
    }
    buf
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn captures_stdout_and_stderr_separately() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo out; echo err >&2"]);
        let output = run_command(&mut cmd).await.expect("run");
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert_eq!(output.exit_code, Some(0));
    }

    #[tokio::test]
    async fn nonzero_exit_is_still_ok() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo partial; exit 3"]);
        let output = run_command(&mut cmd).await.expect("run");
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stdout.trim(), "partial");
    }

    #[tokio::test]
    async fn stdin_is_closed() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "cat; echo done"]);
        let output = run_command(&mut cmd).await.expect("run");
        assert_eq!(output.stdout, "done\n");
    }

    #[tokio::test]
    async fn output_past_cap_is_drained_until_exit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let marker = dir.path().join("finished");
        // 200 chunks of 60 000 bytes is about 12 MB, past the 10 MiB cap.
        let script = format!(
            "i=0; while [ $i -lt 200 ]; do printf '%060000d' 0; i=$((i+1)); done; touch '{}'",
            marker.display()
        );
        let mut cmd = Command::new("sh");
        cmd.args(["-c", &script]);

        let output = run_command(&mut cmd).await.expect("run");

        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.len(), MAX_OUTPUT_BYTES);
        assert!(marker.exists(), "script should run to completion");
    }

    #[tokio::test]
    async fn missing_program_is_io_error() {
        let mut cmd = Command::new("definitely-not-a-real-interpreter-4821");
        let result = run_command(&mut cmd).await;
        assert_matches!(result, Err(ScriptError::IoError(_)));
    }
}
