use crate::OwnershipMap;

/// A single pattern paired with the key of the area it belongs to. Entries
/// borrow from the [`OwnershipMap`] they were flattened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlattenedEntry<'a> {
    pub pattern: &'a str,
    pub key: &'a str,
}

impl<'a> FlattenedEntry<'a> {
    pub fn new(pattern: &'a str, key: &'a str) -> Self {
        Self { pattern, key }
    }

    /// Pattern length in characters, the measure used to pick the most
    /// specific match.
    pub fn specificity(&self) -> usize {
        self.pattern.chars().count()
    }
}

/// Flatten every area's patterns into `(pattern, key)` entries. Entries come
/// out in map order, and within an area in the order its patterns are listed.
pub fn flatten(map: &OwnershipMap) -> Vec<FlattenedEntry<'_>> {
    let mut entries = Vec::with_capacity(map.pattern_count());
    for (key, record) in map {
        entries.extend(
            record
                .patterns()
                .iter()
                .map(|pattern| FlattenedEntry::new(pattern, key)),
        );
    }
    entries
}
