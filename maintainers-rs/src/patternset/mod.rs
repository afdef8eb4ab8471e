//! Sets of shell-style patterns matched against a path in one call.
//!
//! Patterns are added to a [`Builder`], which hands out ids in insertion
//! order. The resulting [`Matcher`] reports the ids of every pattern matching
//! a path, in ascending id order, so callers can map matches back onto
//! whatever the patterns were attached to.

mod builder;
mod glob;
mod matcher;

pub use self::builder::Builder;
pub use self::glob::Glob;
pub use self::matcher::Matcher;
