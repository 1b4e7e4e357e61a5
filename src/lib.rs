//! # dirtag - Tagged Directory Command Runner
//!
//! `dirtag` is a command-line tool that registers directories under named
//! tags in a persistent configuration file and runs arbitrary commands
//! across every directory of a tag, with per-directory confirmation and
//! skip support.
//!
//! ## Features
//!
//! - **Tagged Registration**: Group directories under any number of tags
//! - **Deduplicated Entries**: Identity is the resolved absolute path, so
//!   symlinks and relative spellings collapse to one entry
//! - **Batch Execution**: Run a command sequentially in each directory of
//!   a tag, skipping entries by their 1-based index
//! - **Confirmation Prompts**: Confirm each directory before execution,
//!   or pass `--yes` to run unattended
//! - **TOML Configuration**: A single `directories` table in a per-user
//!   config file; unrelated keys survive every save
//!
//! ## Quick Start
//!
//! ```bash
//! dirtag add ~/work/frontend ~/work/backend --tag web
//! dirtag list --tag web
//! dirtag run --command "git status" --tag web --skip 2 --yes
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Core entities and value objects
//! - [`application`]: Use cases and business workflows
//! - [`infrastructure`]: Config storage and child-process execution
//! - [`presentation`]: CLI interface and user interaction
//! - [`common`]: Shared error handling
//!
//! ## Domain Model
//!
//! - [`domain::entities::registry::Registry`]: Tag → ordered directory
//!   sequence mapping, insertion order preserved
//! - [`domain::entities::registry::DirectoryList`]: Ordered sequence that
//!   refuses duplicate resolved paths
//! - [`domain::value_objects::resolved_path::ResolvedPath`]: Canonical
//!   absolute path used as identity
//!
//! ## Examples
//!
//! ### Registering directories
//!
//! ```rust,no_run
//! use dirtag::application::use_cases::add_directories::{
//!     AddDirectoriesConfig, AddDirectoriesUseCase,
//! };
//! use dirtag::infrastructure::filesystem::config_store::ConfigStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigStore::new("/home/user/.config/dirtag/config.toml");
//! let mut registry = store.load()?;
//!
//! let config = AddDirectoriesConfig::new(vec!["./project".into()], "web");
//! let report = AddDirectoriesUseCase::new(config).execute(&mut registry, &store)?;
//!
//! println!("Added {} directories", report.added_count);
//! # Ok(())
//! # }
//! ```
//!
//! ### Running a command across a tag
//!
//! ```rust,no_run
//! use dirtag::application::use_cases::run_command::{
//!     RunCommandConfig, RunCommandUseCase,
//! };
//! use dirtag::infrastructure::filesystem::config_store::ConfigStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigStore::new("/home/user/.config/dirtag/config.toml");
//! let registry = store.load()?;
//!
//! let config = RunCommandConfig::new("git status", "web").with_auto_confirm(true);
//! let report = RunCommandUseCase::new(config).execute(&registry)?;
//!
//! println!("Executed in {} directories", report.executed_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! - [`common::error::DirtagError`]: Main error type with detailed context
//! - [`common::result::DirtagResult`]: Type alias for `Result<T, DirtagError>`

// Documentation attributes
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::DirtagError;
pub use crate::common::result::DirtagResult as Result;
