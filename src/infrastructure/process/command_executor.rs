use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Command executor related errors
#[derive(Debug, Error, PartialEq)]
pub enum CommandExecutorError {
    #[error("Command is empty or invalid")]
    EmptyCommand,
}

/// A command line split into a program and its arguments.
///
/// Splitting is on whitespace only; there is no quoting support and no
/// shell-metacharacter interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Parse a raw command string by whitespace splitting.
    pub fn parse(raw: &str) -> Result<Self, CommandExecutorError> {
        let mut tokens = raw.split_whitespace().map(String::from);
        let program = tokens.next().ok_or(CommandExecutorError::EmptyCommand)?;
        Ok(Self {
            program,
            args: tokens.collect(),
        })
    }

    /// Program name (first token).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments (remaining tokens).
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Outcome of a single child-process execution.
#[derive(Debug)]
pub enum ExecutionOutcome {
    /// The process ran to completion with the given exit code
    /// (`None` when terminated by a signal).
    Completed { exit_code: Option<i32> },

    /// The process could not be spawned.
    SpawnFailed { error: std::io::Error },
}

impl ExecutionOutcome {
    /// Whether the process ran and exited with status zero.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { exit_code: Some(0) })
    }
}

/// Synchronous child-process executor.
///
/// Runs one command at a time with the working directory set to the
/// target directory. Standard output and error are inherited from the
/// invoking terminal; nothing is captured. A spawn failure is returned
/// as a value so callers can report it and keep going.
#[derive(Debug, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    /// Create a new executor.
    pub fn new() -> Self {
        Self
    }

    /// Run the command in `working_dir`, blocking until it finishes.
    pub fn execute(&self, command: &CommandLine, working_dir: &Path) -> ExecutionOutcome {
        tracing::debug!(
            program = command.program(),
            dir = %working_dir.display(),
            "spawning command"
        );
        match Command::new(command.program())
            .args(command.args())
            .current_dir(working_dir)
            .status()
        {
            Ok(status) => ExecutionOutcome::Completed {
                exit_code: status.code(),
            },
            Err(error) => ExecutionOutcome::SpawnFailed { error },
        }
    }
}
