use std::collections::BTreeSet;

use colored::Colorize;

use crate::application::use_cases::run_command::{
    RunCommandConfig, RunCommandError, RunCommandUseCase,
};
use crate::common::error::DirtagError;
use crate::domain::entities::registry::Registry;

/// Execute a command in each directory of a tag
pub struct RunCommand {
    /// Raw command string (whitespace-split before execution)
    pub command: String,
    /// Target tag
    pub tag: String,
    /// Raw skip list, e.g. "1,3"
    pub skip: String,
    /// Skip the per-directory confirmation prompt
    pub auto_confirm: bool,
    /// Print a summary after the loop
    pub verbose: bool,
}

impl RunCommand {
    pub fn new(
        command: String,
        tag: String,
        skip: String,
        auto_confirm: bool,
        verbose: bool,
    ) -> Self {
        Self {
            command,
            tag,
            skip,
            auto_confirm,
            verbose,
        }
    }

    /// Execute the run command
    pub fn execute(&self, registry: &Registry) -> Result<(), DirtagError> {
        let skip_indices = parse_skip_indices(&self.skip).map_err(|segment| {
            DirtagError::validation_error(
                "skip",
                "expected comma-separated 1-based indices",
                Some(segment),
            )
        })?;

        let config = RunCommandConfig::new(&self.command, &self.tag)
            .with_skip_indices(skip_indices)
            .with_auto_confirm(self.auto_confirm);
        let use_case = RunCommandUseCase::new(config);

        match use_case.execute(registry) {
            Ok(report) => {
                if self.verbose {
                    println!("  Directories executed: {}", report.executed_count);
                    println!("  Directories skipped: {}", report.skipped_count);
                    println!("  Directories declined: {}", report.declined_count);
                }
                if report.failure_count > 0 {
                    println!(
                        "{} {} of {} executed command(s) failed.",
                        "⚠".yellow().bold(),
                        report.failure_count,
                        report.executed_count
                    );
                }
                Ok(())
            }
            Err(RunCommandError::UnknownTag(tag)) => Err(DirtagError::unknown_tag(tag)),
            Err(RunCommandError::InvalidCommand(_)) => Err(DirtagError::command_error(
                "Command is empty or invalid",
                &self.command,
            )),
            Err(RunCommandError::PromptFailed(source)) => Err(DirtagError::internal_error(
                format!("Confirmation prompt failed: {}", source),
            )),
        }
    }
}

/// Parse a "1,3" style skip list into a set of 1-based indices.
///
/// Empty segments are ignored; a non-numeric segment is returned as the
/// error value.
fn parse_skip_indices(raw: &str) -> Result<BTreeSet<usize>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<usize>()
                .map_err(|_| segment.to_string())
        })
        .collect()
}
