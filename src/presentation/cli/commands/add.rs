use std::path::PathBuf;

use crate::application::use_cases::add_directories::{
    AddDirectoriesConfig, AddDirectoriesUseCase, AddOutcome,
};
use crate::common::error::DirtagError;
use crate::domain::entities::registry::Registry;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::presentation::cli::commands::list::print_tag_group;

/// Add directories to the configuration file
pub struct AddCommand {
    /// Directories to register
    pub paths: Vec<PathBuf>,
    /// Target tag
    pub tag: String,
}

impl AddCommand {
    pub fn new(paths: Vec<PathBuf>, tag: String) -> Self {
        Self { paths, tag }
    }

    /// Execute the add command
    ///
    /// Echoes one line per rejected path, persists the registry, then
    /// shows the resulting tag contents.
    pub fn execute(&self, registry: &mut Registry, store: &ConfigStore) -> Result<(), DirtagError> {
        let use_case = AddDirectoriesUseCase::new(AddDirectoriesConfig::new(
            self.paths.clone(),
            self.tag.clone(),
        ));
        let report = use_case.execute(registry, store)?;

        for outcome in &report.outcomes {
            match outcome {
                AddOutcome::NotFound { path } => {
                    println!("{} does not exist.", path.display());
                }
                AddOutcome::NotADirectory { path } => {
                    println!("{} is not a directory.", path.display());
                }
                AddOutcome::AlreadyPresent { path } => {
                    println!("{} is already in the list.", path.display());
                }
                AddOutcome::Added { .. } => {}
            }
        }

        if let Some(directories) = registry.get(&self.tag) {
            print_tag_group(registry, &self.tag, directories);
        }
        Ok(())
    }
}
