//! Synchronous external command execution.
//!
//! Every interaction with the host (`defaults`, `notifyutil`, `killall`,
//! `osascript`) goes through [`CommandRunner`] so the store, refresh protocol
//! and logout action can be exercised against scripted runners in tests.

use std::process::Command;
use thiserror::Error;

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
}

impl CommandOutput {
    /// Builds an output with the given exit code and stdout.
    pub fn new(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
        }
    }

    /// Returns `true` if the command exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// The command could not be started at all.
#[derive(Debug, Error)]
#[error("Failed to execute command: {command}")]
pub struct ProcessError {
    /// Rendered command line.
    pub command: String,
    /// Underlying I/O error from spawning.
    #[source]
    pub source: std::io::Error,
}

/// Runs an executable with arguments and waits for it to exit.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// A non-zero exit is reported through [`CommandOutput::code`], not as an
    /// error. `Err` means the program could not be launched.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProcessError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProcessError> {
        (**self).run(program, args)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProcessError> {
        (**self).run(program, args)
    }
}

/// [`CommandRunner`] backed by `std::process::Command`. Stderr is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProcessError> {
        let command = build_command_string(program, args);
        tracing::debug!("executing command: {}", command);

        let output = Command::new(program)
            .args(args)
            .stdin(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .output()
            .map_err(|e| {
                tracing::debug!("failed to execute {}: {}", command, e);
                ProcessError { command, source: e }
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        };
        if result.success() {
            tracing::debug!("command succeeded: {}", program);
        } else {
            tracing::debug!("command {} exited with {:?}", program, result.code);
        }
        Ok(result)
    }
}

/// Renders a command line for logs and error messages.
pub fn build_command_string(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_string_with_args() {
        let result = build_command_string("/usr/bin/killall", &["ControlCenter"]);
        assert_eq!(result, "/usr/bin/killall ControlCenter");
    }

    #[test]
    fn test_build_command_string_no_args() {
        assert_eq!(build_command_string("true", &[]), "true");
    }

    #[test]
    fn test_command_output_success() {
        assert!(CommandOutput::new(0, "").success());
        assert!(!CommandOutput::new(1, "").success());
        let signalled = CommandOutput {
            code: None,
            stdout: String::new(),
        };
        assert!(!signalled.success());
    }

    #[test]
    fn test_process_error_display_and_source() {
        let err = ProcessError {
            command: "/usr/bin/defaults read".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to execute command: /usr/bin/defaults read"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_system_runner_missing_program_is_spawn_error() {
        let result = SystemRunner.run("/nonexistent/tmb-test-binary", &["x"]);
        let err = result.expect_err("missing binary cannot be spawned");
        assert!(err.command.contains("tmb-test-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout_and_exit_code() {
        let out = SystemRunner
            .run("sh", &["-c", "echo 7; exit 3"])
            .expect("sh should be available");
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stdout.trim(), "7");
    }
}
