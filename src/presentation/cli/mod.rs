pub mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;

use crate::common::error::DirtagError;
use crate::common::result::DirtagResult;
use crate::domain::entities::registry::DEFAULT_TAG;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::presentation::cli::commands::{add::AddCommand, list::ListCommand, run::RunCommand};

/// Version string including the build metadata emitted by build.rs.
const LONG_VERSION: &str = concat!(
    env!("DIRTAG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// dirtag - run commands across tagged directories
#[derive(Parser)]
#[command(name = "dirtag")]
#[command(about = "Register directories under named tags and run commands across them")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add directories to the configuration file
    Add {
        /// Directories to register
        path: Vec<PathBuf>,

        /// Tag of directories
        #[arg(short, long, default_value = DEFAULT_TAG)]
        tag: String,
    },

    /// Execute a command in each directory of a tag
    Run {
        /// Command to execute, given as one string, for example 'ls -lha'
        #[arg(short, long)]
        command: String,

        /// Tag of directories
        #[arg(short, long, default_value = DEFAULT_TAG)]
        tag: String,

        /// 1-based indices of directories to skip, for example '1,3'
        #[arg(short, long, default_value = "")]
        skip: String,

        /// Execute the command without confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List registered directories
    List {
        /// Tag of directories
        #[arg(short, long, default_value = DEFAULT_TAG)]
        tag: String,

        /// List all directories of all tags
        #[arg(short, long)]
        all: bool,

        /// List one directory per line
        #[arg(short = '1')]
        one_per_line: bool,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command() {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    fn handle_command(&self) -> DirtagResult<()> {
        match &self.cli.command {
            Commands::Add { path, tag } => self.handle_add_command(path, tag),
            Commands::Run {
                command,
                tag,
                skip,
                yes,
            } => self.handle_run_command(command, tag, skip, *yes),
            Commands::List {
                tag,
                all,
                one_per_line,
            } => self.handle_list_command(tag, *all, *one_per_line),
        }
    }

    fn handle_add_command(&self, paths: &[PathBuf], tag: &str) -> DirtagResult<()> {
        let store = self.open_store()?;
        let mut registry = store.load()?;

        let command = AddCommand::new(paths.to_vec(), tag.to_string());
        command.execute(&mut registry, &store)
    }

    fn handle_run_command(
        &self,
        command: &str,
        tag: &str,
        skip: &str,
        yes: bool,
    ) -> DirtagResult<()> {
        let store = self.open_store()?;
        let registry = store.load()?;

        let run = RunCommand::new(
            command.to_string(),
            tag.to_string(),
            skip.to_string(),
            yes,
            self.cli.verbose,
        );
        run.execute(&registry)
    }

    fn handle_list_command(&self, tag: &str, all: bool, one_per_line: bool) -> DirtagResult<()> {
        let store = self.open_store()?;
        let registry = store.load()?;

        let list = ListCommand::new(tag.to_string(), all, one_per_line);
        list.execute(&registry);
        Ok(())
    }

    /// Resolve the config file location once per invocation: the
    /// `--config` override, or the platform config directory.
    fn open_store(&self) -> DirtagResult<ConfigStore> {
        let path = match &self.cli.config {
            Some(path) => path.clone(),
            None => ConfigStore::default_path().ok_or_else(|| {
                DirtagError::storage_error("Could not determine the user config directory", None)
            })?,
        };
        Ok(ConfigStore::new(path))
    }
}
