//! Shell command execution.

use crate::error::{PrdEnvError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Timeout applied to every environment probe.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timeout).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed because it exceeded the timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a timeout result.
    pub fn timeout(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Timeout in seconds (None = no timeout).
    pub timeout: Option<u64>,
}

/// Execute a shell command, capturing stdout and stderr.
///
/// The command runs through the OS shell so pipelines and redirections in
/// probe commands (e.g. `java -version 2>&1 | head -n 1`) behave as typed.
/// When a timeout is set, the child is polled with `try_wait` and killed
/// once the deadline passes.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|_| PrdEnvError::CommandSpawnError {
        command: command.to_string(),
    })?;

    // Drain the pipes on separate threads so a chatty child can't block
    // on a full pipe buffer while we poll for exit.
    let mut stdout_pipe = child.stdout.take().expect("stdout was piped");
    let mut stderr_pipe = child.stderr.take().expect("stderr was piped");

    let stdout_handle = thread::spawn(move || {
        let mut buf = String::new();
        let _ = stdout_pipe.read_to_string(&mut buf);
        buf
    });
    let stderr_handle = thread::spawn(move || {
        let mut buf = String::new();
        let _ = stderr_pipe.read_to_string(&mut buf);
        buf
    });

    let deadline = options.timeout.map(Duration::from_secs);
    let mut timed_out = false;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break Some(status),
            Ok(None) => {
                if let Some(limit) = deadline {
                    if start.elapsed() >= limit {
                        timed_out = true;
                        let _ = child.kill();
                        let _ = child.wait();
                        break None;
                    }
                }
                thread::sleep(Duration::from_millis(25));
            }
            Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    let duration = start.elapsed();

    match status {
        Some(status) if status.success() => Ok(CommandResult::success(stdout, stderr, duration)),
        Some(status) => Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        )),
        None if timed_out => Ok(CommandResult::timeout(stdout, stderr, duration)),
        None => Ok(CommandResult::failure(None, stdout, stderr, duration)),
    }
}

/// Run a single probe command with the fixed probe timeout.
///
/// Returns `(success, trimmed stdout)`. A timeout yields
/// `(false, "Command timeout")`; a spawn failure degrades to
/// `(false, <error text>)`. Probes never escalate and are never retried.
pub fn probe(command: &str) -> (bool, String) {
    let options = CommandOptions {
        timeout: Some(PROBE_TIMEOUT_SECS),
        ..Default::default()
    };

    match execute(command, &options) {
        Ok(result) if result.timed_out => (false, "Command timeout".to_string()),
        Ok(result) => (result.success, result.stdout.trim().to_string()),
        Err(e) => (false, e.to_string()),
    }
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
        assert!(!result.timed_out);
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 1", &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
        assert!(!result.timed_out);
    }

    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("MY_VAR".to_string(), "my_value".to_string());

        let cmd = if cfg!(target_os = "windows") {
            "echo %MY_VAR%"
        } else {
            "echo $MY_VAR"
        };

        let result = execute(cmd, &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("my_value"));
    }

    #[test]
    fn execute_captures_stderr() {
        let cmd = if cfg!(target_os = "windows") {
            "echo oops 1>&2"
        } else {
            "echo oops >&2"
        };

        let result = execute(cmd, &CommandOptions::default()).unwrap();

        assert!(result.stderr.contains("oops"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_kills_command_past_timeout() {
        let options = CommandOptions {
            timeout: Some(1),
            ..Default::default()
        };

        let result = execute("sleep 5", &options).unwrap();

        assert!(!result.success);
        assert!(result.timed_out);
        assert!(result.exit_code.is_none());
        assert!(result.duration < Duration::from_secs(3));
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute("echo fast", &CommandOptions::default()).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn probe_success_reports_stdout() {
        let (ok, output) = probe("echo hello");
        assert!(ok);
        assert_eq!(output, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn probe_trims_surrounding_whitespace() {
        let (ok, output) = probe("echo '  spaced  '");
        assert!(ok);
        assert_eq!(output, "spaced");
    }

    #[test]
    fn probe_missing_executable_fails_without_panic() {
        let (ok, _output) = probe("definitely-not-a-real-binary-xyz --version");
        assert!(!ok);
    }

    #[cfg(unix)]
    #[test]
    fn probe_sleep_past_limit_reports_timeout() {
        let start = Instant::now();
        let (ok, output) = probe("sleep 7");

        assert!(!ok);
        assert_eq!(output, "Command timeout");
        // Fires at 5s; allow poll-loop and shell startup slack.
        assert!(start.elapsed() < Duration::from_secs(7));
    }

    #[test]
    fn probe_failure_keeps_stdout() {
        let cmd = if cfg!(target_os = "windows") {
            "echo partial & exit 3"
        } else {
            "echo partial; exit 3"
        };

        let (ok, output) = probe(cmd);
        assert!(!ok);
        assert_eq!(output, "partial");
    }
}
