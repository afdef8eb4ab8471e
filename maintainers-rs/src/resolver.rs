use serde::{Serialize, Serializer};
use serde_yaml::Value;

use crate::{
    flatten,
    patternset::{Builder, Matcher},
    AreaRecord, FlattenedEntry, NoMatchError, OwnershipMap,
};

/// Name of the field carrying the owner-key in a [`ResolvedOwnership`].
pub const KEY_FIELD: &str = "key";
/// Name of the field carrying the queried path in a [`ResolvedOwnership`].
pub const PATH_FIELD: &str = "path";

/// Resolve the area owning `path`. When several patterns match, the longest
/// one (in characters) wins; among equally long patterns the first in map
/// order wins.
///
/// This flattens and compiles the map's patterns on every call. Use a
/// [`Resolver`] to answer many queries against the same map.
pub fn resolve(path: &str, map: &OwnershipMap) -> Result<ResolvedOwnership, NoMatchError> {
    Resolver::new(map).resolve(path)
}

/// Pick the most specific entry: the longest pattern, and the earliest one
/// when several share that length.
pub fn most_specific<'e, 'a>(
    matches: impl IntoIterator<Item = &'e FlattenedEntry<'a>>,
) -> Option<&'e FlattenedEntry<'a>>
where
    'a: 'e,
{
    matches.into_iter().fold(None, |best, entry| match best {
        Some(best) if best.specificity() >= entry.specificity() => Some(best),
        _ => Some(entry),
    })
}

/// Resolves paths against a borrowed [`OwnershipMap`]. The map's patterns are
/// flattened and compiled once, up front.
#[derive(Clone, Debug)]
pub struct Resolver<'a> {
    map: &'a OwnershipMap,
    entries: Vec<FlattenedEntry<'a>>,
    matcher: Matcher,
}

impl<'a> Resolver<'a> {
    pub fn new(map: &'a OwnershipMap) -> Self {
        let entries = flatten(map);
        let matcher = entries
            .iter()
            .map(|entry| entry.pattern)
            .collect::<Builder>()
            .build();
        Self {
            map,
            entries,
            matcher,
        }
    }

    pub fn entries(&self) -> &[FlattenedEntry<'a>] {
        &self.entries
    }

    /// Every entry matching `path`, in flattening order.
    pub fn matching_entries(&self, path: &str) -> Vec<&FlattenedEntry<'a>> {
        self.matcher
            .matching_patterns(path)
            .into_iter()
            .map(|id| &self.entries[id])
            .collect()
    }

    /// The entry that decides ownership of `path`, if any pattern matches.
    pub fn winning_entry(&self, path: &str) -> Option<&FlattenedEntry<'a>> {
        most_specific(self.matching_entries(path))
    }

    pub fn resolve(&self, path: &str) -> Result<ResolvedOwnership, NoMatchError> {
        let winner = self
            .winning_entry(path)
            .ok_or_else(|| NoMatchError::new(path))?;
        Ok(self.ownership(winner, path))
    }

    /// Build the result for an entry already chosen from
    /// [`Resolver::matching_entries`], without matching `path` again.
    pub fn ownership(&self, winner: &FlattenedEntry<'a>, path: &str) -> ResolvedOwnership {
        // Entries are flattened from this same map, so the key is present.
        let record = &self.map[winner.key];
        ResolvedOwnership::new(record, winner.key, path)
    }
}

/// The outcome of a successful query: a copy of the owning area's record
/// with `key` set to its owner-key and `path` to the queried path. Existing
/// `key` or `path` fields are overwritten where they stand; otherwise both
/// are appended after the record's own fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOwnership {
    record: AreaRecord,
    key: String,
    path: String,
}

impl ResolvedOwnership {
    fn new(record: &AreaRecord, key: &str, path: &str) -> Self {
        Self {
            record: record
                .clone()
                .with_field(KEY_FIELD, key)
                .with_field(PATH_FIELD, path),
            key: key.to_owned(),
            path: path.to_owned(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The augmented record, including its `key` and `path` fields.
    pub fn record(&self) -> &AreaRecord {
        &self.record
    }

    /// Look up a field by name, including `key`, `path` and `F`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.record.field(name)
    }
}

impl Serialize for ResolvedOwnership {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}
