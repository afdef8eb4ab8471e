use crate::{patternset::Builder, FlattenedEntry};

/// Return the entries whose pattern matches `path`, keeping their input
/// order. The whole path must match; it is compared verbatim.
pub fn match_path<'e, 'a>(
    path: &str,
    entries: &'e [FlattenedEntry<'a>],
) -> Vec<&'e FlattenedEntry<'a>> {
    let matcher = entries
        .iter()
        .map(|entry| entry.pattern)
        .collect::<Builder>()
        .build();
    matcher
        .matching_patterns(path)
        .into_iter()
        .map(|id| &entries[id])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_path() {
        let entries = [
            FlattenedEntry::new("src/*", "a"),
            FlattenedEntry::new("docs/*", "docs"),
            FlattenedEntry::new("src/core/*", "b"),
            FlattenedEntry::new("*.c", "c-files"),
        ];

        let keys = |path| {
            match_path(path, &entries)
                .into_iter()
                .map(|e| e.key)
                .collect::<Vec<_>>()
        };
        assert_eq!(keys("src/core/engine.c"), ["a", "b", "c-files"]);
        assert_eq!(keys("docs/readme.md"), ["docs"]);
        assert!(keys("bin/tool").is_empty());
    }

    #[test]
    fn test_match_path_is_anchored() {
        let entries = [FlattenedEntry::new("core", "a")];
        assert!(match_path("src/core", &entries).is_empty());
        assert!(match_path("core/x", &entries).is_empty());
        assert_eq!(match_path("core", &entries).len(), 1);
    }

    #[test]
    fn test_match_path_does_not_normalize() {
        let entries = [FlattenedEntry::new("docs/*", "docs")];
        assert!(match_path("./docs/readme.md", &entries).is_empty());
        assert!(match_path("Docs/readme.md", &entries).is_empty());
        assert_eq!(match_path("docs/", &entries).len(), 1);
    }

    #[test]
    fn test_match_path_no_entries() {
        assert!(match_path("anything", &[]).is_empty());
    }
}
