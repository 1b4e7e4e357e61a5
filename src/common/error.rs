use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirtagError {
    #[error("Configuration storage failed: {message}")]
    StorageError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unknown tag: {tag}")]
    UnknownTag { tag: String },

    #[error("Command execution failed: {message}")]
    CommandError {
        message: String,
        command: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        field: String,
        message: String,
        value: Option<String>,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl DirtagError {
    pub fn storage_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::StorageError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn storage_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::StorageError {
            message: message.into(),
            path,
            source: Some(Box::new(source)),
        }
    }

    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag { tag: tag.into() }
    }

    pub fn command_error(message: impl Into<String>, command: impl Into<String>) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            source: None,
        }
    }

    pub fn command_error_with_source(
        message: impl Into<String>,
        command: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            source: Some(source),
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for DirtagError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<toml::de::Error> for DirtagError {
    fn from(error: toml::de::Error) -> Self {
        Self::storage_error_with_source("TOML parsing failed", None, error)
    }
}

impl From<toml::ser::Error> for DirtagError {
    fn from(error: toml::ser::Error) -> Self {
        Self::storage_error_with_source("TOML serialization failed", None, error)
    }
}
