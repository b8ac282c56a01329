//! Display server detection and external command helpers.

use std::process::Command;

use multiwall_common::error::{MultiwallError, MultiwallResult};
pub use multiwall_platform_core::DisplayServer;

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Whether `binary` resolves on `$PATH`.
pub fn command_exists(binary: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {binary}"))
        .output()
        .map(|o| o.status.success() && !o.stdout.is_empty())
        .unwrap_or(false)
}

/// Run `program args...` to completion and return its stdout.
///
/// A spawn failure or non-zero exit is returned as an error; no retries.
pub fn run_command(program: &str, args: &[&str]) -> MultiwallResult<String> {
    let rendered = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!(command = %rendered, "Running command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| MultiwallError::platform(format!("Failed to start {program}: {e}")))?;

    if !output.status.success() {
        return Err(MultiwallError::CommandFailed {
            command: rendered,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_is_found() {
        assert!(command_exists("sh"));
        assert!(!command_exists("multiwall-no-such-binary"));
    }

    #[test]
    fn run_command_captures_stdout() {
        let out = run_command("sh", &["-c", "printf hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn run_command_reports_failure() {
        let err = run_command("sh", &["-c", "echo nope >&2; exit 3"]).unwrap_err();
        match err {
            MultiwallError::CommandFailed {
                command, stderr, ..
            } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(stderr, "nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_program_is_platform_error() {
        let err = run_command("multiwall-no-such-binary", &[]).unwrap_err();
        assert!(matches!(err, MultiwallError::Platform { .. }));
    }
}
