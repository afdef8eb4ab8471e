//! Loading an [`OwnershipMap`] from a YAML MAINTAINERS file.
//!
//! The file is a mapping from owner-key to area. Each area needs an `F` field
//! holding one pattern or a list of patterns; any other fields are kept as-is.
//!
//! ```yaml
//! core:
//!   F: src/core/*
//!   M: Jane Doe <jane@example.com>
//! docs:
//!   F: [docs/*, "*.md"]
//! ```
//!
//! Patterns starting with `*` must be quoted, since YAML reads a leading `*`
//! as an alias.

use std::{fs, path::Path};

use crate::{ConfigError, OwnershipMap};

/// File name used when no MAINTAINERS file is given explicitly.
pub const DEFAULT_FILE_NAME: &str = "MAINTAINERS";

/// Parse MAINTAINERS data from a string. An empty document is an empty map.
pub fn parse_str(source: &str) -> Result<OwnershipMap, ConfigError> {
    if source.trim().is_empty() {
        return Ok(OwnershipMap::new());
    }
    let map: Option<OwnershipMap> = serde_yaml::from_str(source)?;
    Ok(map.unwrap_or_default())
}

/// Read and parse a MAINTAINERS file.
pub fn from_path(path: impl AsRef<Path>) -> Result<OwnershipMap, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_str(&source)
}
