use std::{io, path::PathBuf};

/// No pattern in the ownership map matches the queried path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("couldn't find a match for path: {path}")]
pub struct NoMatchError {
    pub path: String,
}

impl NoMatchError {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Errors from reading a MAINTAINERS file. Structural problems in the data,
/// such as an area without an `F` field, surface here as [`ConfigError::Yaml`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid MAINTAINERS data: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
