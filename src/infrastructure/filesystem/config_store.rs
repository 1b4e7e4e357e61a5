use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::common::error::DirtagError;
use crate::domain::entities::registry::Registry;

/// Key of the top-level table holding the tag -> directory-list mapping.
const DIRECTORIES_KEY: &str = "directories";

/// Config store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Config file read failed: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file write failed: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing failed: {path}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialization failed")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Directory creation failed: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ConfigStoreError> for DirtagError {
    fn from(error: ConfigStoreError) -> Self {
        DirtagError::storage_error_with_source("Configuration file operation failed", None, error)
    }
}

/// Shape of the parts of the config file this tool owns.
#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    directories: Registry,
}

/// Full document view used for writing: carries the unrelated top-level
/// keys of the existing file through a save untouched. Plain values are
/// emitted before tables so nothing lands inside the wrong section.
struct DocumentView<'a> {
    extras: &'a toml::Table,
    registry: &'a Registry,
}

impl Serialize for DocumentView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let unrelated = |key: &str| key != DIRECTORIES_KEY;
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self
            .extras
            .iter()
            .filter(|(key, value)| unrelated(key) && !value.is_table())
        {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in self
            .extras
            .iter()
            .filter(|(key, value)| unrelated(key) && value.is_table())
        {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(DIRECTORIES_KEY, self.registry)?;
        map.end()
    }
}

/// Persistent store for the tag registry.
///
/// The registry lives in a single TOML file under a top-level
/// `directories` table whose keys are tag names and whose values are
/// ordered arrays of absolute path strings. Top-level keys other than
/// `directories` are carried through a save untouched.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by the given config file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform-standard location of the config file, resolved once at
    /// CLI startup: `<config dir>/dirtag/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirtag").join("config.toml"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the registry from the config file.
    ///
    /// Creates the file (and its parent directories) if absent. An empty
    /// file, or a file without a `directories` table, yields an empty
    /// registry. Tag order follows the order of appearance in the file.
    pub fn load(&self) -> Result<Registry, ConfigStoreError> {
        if !self.path.exists() {
            self.create_empty_file()?;
            tracing::debug!(path = %self.path.display(), "created empty config file");
            return Ok(Registry::new());
        }

        let content = self.read_content()?;
        let document: RawDocument =
            toml::from_str(&content).map_err(|source| ConfigStoreError::ParseFailed {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            tags = document.directories.len(),
            "loaded registry"
        );
        Ok(document.directories)
    }

    /// Write the registry back to the config file.
    ///
    /// The current document is re-read and only the `directories` table is
    /// replaced, so unrelated top-level keys survive. Directory arrays are
    /// written one element per line.
    pub fn save(&self, registry: &Registry) -> Result<(), ConfigStoreError> {
        let extras = self.read_extras()?;
        let view = DocumentView {
            extras: &extras,
            registry,
        };

        let content = toml::to_string_pretty(&view)?;
        self.ensure_parent_dirs()?;
        fs::write(&self.path, content).map_err(|source| ConfigStoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            tags = registry.len(),
            "saved registry"
        );
        Ok(())
    }

    fn read_content(&self) -> Result<String, ConfigStoreError> {
        fs::read_to_string(&self.path).map_err(|source| ConfigStoreError::ReadFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Current top-level table of the file, or an empty one if the file
    /// is missing.
    fn read_extras(&self) -> Result<toml::Table, ConfigStoreError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        self.read_content()?
            .parse()
            .map_err(|source| ConfigStoreError::ParseFailed {
                path: self.path.clone(),
                source,
            })
    }

    fn ensure_parent_dirs(&self) -> Result<(), ConfigStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| {
                    ConfigStoreError::DirectoryCreationFailed {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }
        Ok(())
    }

    fn create_empty_file(&self) -> Result<(), ConfigStoreError> {
        self.ensure_parent_dirs()?;
        fs::write(&self.path, "").map_err(|source| ConfigStoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::resolved_path::ResolvedPath;
    use tempfile::TempDir;

    fn seeded_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .entry("web")
            .insert(ResolvedPath::from_stored("/srv/frontend"));
        registry
            .entry("web")
            .insert(ResolvedPath::from_stored("/srv/assets"));
        registry
            .entry("api")
            .insert(ResolvedPath::from_stored("/srv/backend"));
        registry
    }

    #[test]
    fn test_load_missing_file_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let store = ConfigStore::new(&config_path);

        let registry = store.load().unwrap();

        assert!(registry.is_empty());
        assert!(config_path.exists());
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "");
    }

    #[test]
    fn test_load_empty_file_yields_empty_registry() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let registry = ConfigStore::new(&config_path).load().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_save_load_round_trip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let store = ConfigStore::new(&config_path);

        let registry = seeded_registry();
        store.save(&registry).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(registry, reloaded);
        // tag order and entry order both survive the round trip
        let tags: Vec<&str> = reloaded.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec!["web", "api"]);
        let web: Vec<&str> = reloaded
            .get("web")
            .unwrap()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(web, vec!["/srv/frontend", "/srv/assets"]);
    }

    #[test]
    fn test_save_preserves_unrelated_top_level_keys() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "editor = \"vim\"\n\n[directories]\nweb = [\"/srv/frontend\"]\n",
        )
        .unwrap();
        let store = ConfigStore::new(&config_path);

        let mut registry = store.load().unwrap();
        registry
            .entry("api")
            .insert(ResolvedPath::from_stored("/srv/backend"));
        store.save(&registry).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("editor = \"vim\""));
        assert!(content.contains("/srv/frontend"));
        assert!(content.contains("/srv/backend"));
    }

    #[test]
    fn test_save_preserves_unrelated_tables() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[ui]\ntheme = \"dark\"\n").unwrap();
        let store = ConfigStore::new(&config_path);

        let registry = store.load().unwrap();
        store.save(&registry).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[ui]"));
        assert!(content.contains("theme = \"dark\""));
        assert!(content.contains("[directories]"));
    }

    #[test]
    fn test_save_twice_is_stable_on_list_contents() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let store = ConfigStore::new(&config_path);

        store.save(&seeded_registry()).unwrap();
        let first = fs::read_to_string(&config_path).unwrap();

        let reloaded = store.load().unwrap();
        store.save(&reloaded).unwrap();
        let second = fs::read_to_string(&config_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_malformed_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[directories\nweb = [").unwrap();

        let result = ConfigStore::new(&config_path).load();
        assert!(matches!(result, Err(ConfigStoreError::ParseFailed { .. })));
    }

    #[test]
    fn test_load_without_directories_table_yields_empty_registry() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "editor = \"vim\"\n").unwrap();

        let registry = ConfigStore::new(&config_path).load().unwrap();
        assert!(registry.is_empty());
    }
}
