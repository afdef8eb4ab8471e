use maintainers_rs::{
    flatten, match_path, patternset::Glob, resolve, AreaRecord, OneOrMany, OwnershipMap,
};
use proptest::prelude::*;

// Patterns and paths over a tiny alphabet so that matches are common.
fn pattern() -> impl Strategy<Value = String> {
    "[ab/*?]{0,6}"
}

fn path() -> impl Strategy<Value = String> {
    "[ab/]{0,8}"
}

// Patterns that also contain bracket classes, including negated, reversed and
// unterminated ones.
fn class_pattern() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec![
        "a", "b", "/", "*", "?", "[ab]", "[!a]", "[a-b]", "[b-a]", "[]a]", "[!]]", "[!b-a]", "[",
        "]",
    ]);
    prop::collection::vec(piece, 0..5).prop_map(|pieces| pieces.concat())
}

fn class_path() -> impl Strategy<Value = String> {
    "[ab/\\[\\]]{0,8}"
}

fn ownership_map() -> impl Strategy<Value = OwnershipMap> {
    prop::collection::vec(
        prop_oneof![
            pattern().prop_map(OneOrMany::One),
            prop::collection::vec(pattern(), 0..4).prop_map(OneOrMany::Many),
        ],
        0..6,
    )
    .prop_map(|areas| {
        areas
            .into_iter()
            .enumerate()
            .map(|(i, patterns)| (format!("area-{i}"), AreaRecord::new(patterns)))
            .collect()
    })
}

// Splits a bracket class off the front of `pattern` (which starts with `[`)
// into its negation flag, its body and the rest. `None` when unterminated.
fn split_class(pattern: &[char]) -> Option<(bool, &[char], &[char])> {
    let negated = pattern.get(1) == Some(&'!');
    let start = if negated { 2 } else { 1 };
    let mut end = start;
    if pattern.get(end) == Some(&']') {
        end += 1;
    }
    while end < pattern.len() && pattern[end] != ']' {
        end += 1;
    }
    (end < pattern.len()).then(|| (negated, &pattern[start..end], &pattern[end + 1..]))
}

fn class_contains(body: &[char], c: char) -> bool {
    let mut i = 0;
    while i < body.len() {
        if i + 2 < body.len() && body[i + 1] == '-' {
            if body[i] <= c && c <= body[i + 2] {
                return true;
            }
            i += 3;
        } else {
            if body[i] == c {
                return true;
            }
            i += 1;
        }
    }
    false
}

// Straightforward backtracking matcher for `*`, `?`, bracket classes and
// literals.
fn naive_match(pattern: &[char], candidate: &[char]) -> bool {
    match pattern.split_first() {
        None => candidate.is_empty(),
        Some((&'[', rest)) => match split_class(pattern) {
            Some((negated, body, after)) => match candidate.split_first() {
                Some((&c, tail)) => class_contains(body, c) != negated && naive_match(after, tail),
                None => false,
            },
            None => candidate.first() == Some(&'[') && naive_match(rest, &candidate[1..]),
        },
        Some((&'*', rest)) => {
            (0..=candidate.len()).any(|skip| naive_match(rest, &candidate[skip..]))
        }
        Some((&'?', rest)) => !candidate.is_empty() && naive_match(rest, &candidate[1..]),
        Some((c, rest)) => candidate.first() == Some(c) && naive_match(rest, &candidate[1..]),
    }
}

proptest! {
    #[test]
    fn glob_agrees_with_naive_matcher(pattern in pattern(), path in path()) {
        let pattern_chars = pattern.chars().collect::<Vec<_>>();
        let path_chars = path.chars().collect::<Vec<_>>();
        prop_assert_eq!(
            Glob::new(&pattern).is_match(&path),
            naive_match(&pattern_chars, &path_chars)
        );
    }

    #[test]
    fn glob_classes_agree_with_naive_matcher(pattern in class_pattern(), path in class_path()) {
        let pattern_chars = pattern.chars().collect::<Vec<_>>();
        let path_chars = path.chars().collect::<Vec<_>>();
        prop_assert_eq!(
            Glob::new(&pattern).is_match(&path),
            naive_match(&pattern_chars, &path_chars),
            "pattern {:?} path {:?}", pattern, path
        );
    }

    #[test]
    fn flattening_yields_one_entry_per_pattern(map in ownership_map()) {
        let expected: usize = map.iter().map(|(_, record)| record.patterns().len()).sum();
        prop_assert_eq!(flatten(&map).len(), expected);
    }

    #[test]
    fn resolution_picks_first_longest_match(map in ownership_map(), path in path()) {
        let entries = flatten(&map);
        let matches = match_path(&path, &entries);

        match resolve(&path, &map) {
            Ok(resolved) => {
                prop_assert_eq!(resolved.path(), path.as_str());
                let longest = matches.iter().map(|e| e.specificity()).max().unwrap();
                let first_longest = matches
                    .iter()
                    .find(|e| e.specificity() == longest)
                    .unwrap();
                prop_assert_eq!(resolved.key(), first_longest.key);
                prop_assert_eq!(resolved.record().patterns(), map[resolved.key()].patterns());
                prop_assert_eq!(resolved.get("key").and_then(|v| v.as_str()), Some(resolved.key()));
            }
            Err(err) => {
                prop_assert!(matches.is_empty());
                prop_assert_eq!(err.path, path);
            }
        }
    }

    #[test]
    fn resolution_is_deterministic_and_pure(map in ownership_map(), path in path()) {
        let before = map.clone();
        let first = resolve(&path, &map);
        let second = resolve(&path, &map);
        prop_assert_eq!(first, second);
        prop_assert_eq!(map, before);
    }
}
