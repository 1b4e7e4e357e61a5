use colored::Colorize;

use crate::application::use_cases::list_directories::{
    ListDirectoriesConfig, ListDirectoriesUseCase,
};
use crate::domain::entities::registry::{DirectoryList, Registry};

/// List registered directories
pub struct ListCommand {
    /// Tag to list
    pub tag: String,
    /// List every tag
    pub all_tags: bool,
    /// One deduplicated path per line, no grouping
    pub one_per_line: bool,
}

impl ListCommand {
    pub fn new(tag: String, all_tags: bool, one_per_line: bool) -> Self {
        Self {
            tag,
            all_tags,
            one_per_line,
        }
    }

    /// Execute the list command
    pub fn execute(&self, registry: &Registry) {
        let use_case =
            ListDirectoriesUseCase::new(ListDirectoriesConfig::new(&self.tag, self.all_tags));

        if self.one_per_line {
            for path in use_case.flat_union(registry) {
                println!("{}", path);
            }
            return;
        }

        for listing in use_case.select(registry) {
            print_tag_group(registry, listing.tag, listing.directories);
        }
    }
}

/// Print one tag group: the tag name, then each directory at its 1-based
/// index, annotated with the other tags it also belongs to.
pub fn print_tag_group(registry: &Registry, tag: &str, directories: &DirectoryList) {
    println!("{}:", tag.bold());
    for (position, dir) in directories.iter().enumerate() {
        let extra_tags: Vec<&str> = registry
            .tags_for(dir)
            .into_iter()
            .filter(|other| *other != tag)
            .collect();
        if extra_tags.is_empty() {
            println!("{}: {}", position + 1, dir);
        } else {
            println!(
                "{}: {} : {}",
                position + 1,
                dir,
                extra_tags.join(", ").cyan()
            );
        }
    }
}
