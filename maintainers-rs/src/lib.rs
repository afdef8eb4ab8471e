//! Decide who is responsible for which part of a directory tree.
//!
//! An [`OwnershipMap`] assigns shell-style file patterns to areas of
//! responsibility. [`resolve`] finds the area owning a path by matching it
//! against every pattern and picking the longest matching one.
//!
//! ```
//! use maintainers_rs::{resolve, AreaRecord, OwnershipMap};
//!
//! let map = [
//!     ("src", AreaRecord::new("src/*")),
//!     ("core", AreaRecord::new("src/core/*").with_field("M", "Jane Doe")),
//! ]
//! .into_iter()
//! .collect::<OwnershipMap>();
//!
//! let owner = resolve("src/core/engine.c", &map).unwrap();
//! assert_eq!(owner.key(), "core");
//! assert_eq!(owner.path(), "src/core/engine.c");
//! ```

mod area;
pub mod config;
mod error;
mod flatten;
mod matching;
pub mod patternset;
mod resolver;

pub use area::{AreaRecord, OneOrMany, OwnershipMap, PATTERNS_FIELD};
pub use config::{from_path, parse_str};
pub use error::{ConfigError, NoMatchError};
pub use flatten::{flatten, FlattenedEntry};
pub use matching::match_path;
pub use resolver::{most_specific, resolve, ResolvedOwnership, Resolver, KEY_FIELD, PATH_FIELD};
