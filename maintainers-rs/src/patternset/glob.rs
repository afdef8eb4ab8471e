/// A single compiled shell-style pattern. Patterns are anchored at both ends
/// and `*` is allowed to cross path separators, so `src/*` matches
/// `src/core/engine.c`. Paths are compared exactly as given: no case folding,
/// no slash normalization.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    condition: MatchCondition,
}

impl Glob {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
            condition: MatchCondition::new(pattern),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.condition.is_match(&self.pattern, candidate)
    }
}

#[derive(Debug, Clone)]
enum MatchCondition {
    Unconditional,
    Literal,
    Prefix,
    Suffix,
    Contains,
    Regex(regex::Regex),
    // Patterns too large for the regex size limit
    Wildcard(Vec<Token>),
    // A character class with no members can never match anything
    Never,
}

impl MatchCondition {
    fn new(glob: &str) -> Self {
        if !glob.is_empty() && glob.chars().all(|c| c == '*') {
            return Self::Unconditional;
        }

        let mut chars = glob.chars();
        let leading_star = chars.next().map(|c| c == '*').unwrap_or(false);
        let trailing_star = chars.next_back().map(|c| c == '*').unwrap_or(false);
        let internal_wildcards = has_wildcard(chars);
        let leading_meta = glob.starts_with(is_meta);
        let trailing_meta = glob.chars().count() > 1 && glob.ends_with(is_meta);

        match (
            leading_star,
            trailing_star,
            internal_wildcards || leading_meta || trailing_meta,
        ) {
            (false, false, false) => Self::Literal,
            (false, true, false) => Self::Prefix,
            (true, false, false) => Self::Suffix,
            (true, true, false) => Self::Contains,
            _ => match parse_tokens(glob) {
                Some(tokens) => match tokens_to_regex(&tokens) {
                    Ok(regex) => Self::Regex(regex),
                    Err(_) => Self::Wildcard(tokens),
                },
                None => Self::Never,
            },
        }
    }

    fn is_match(&self, pattern: &str, candidate: &str) -> bool {
        match self {
            Self::Unconditional => true,
            Self::Literal => pattern == candidate,
            Self::Prefix => candidate.starts_with(pattern.trim_end_matches('*')),
            Self::Suffix => candidate.ends_with(pattern.trim_start_matches('*')),
            Self::Contains => {
                memchr::memmem::find(candidate.as_bytes(), pattern.trim_matches('*').as_bytes())
                    .is_some()
            }
            Self::Regex(re) => re.is_match(candidate),
            Self::Wildcard(tokens) => tokens_match(tokens, candidate),
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnyString,
    // Inclusive ranges; a single member is a range from a char to itself
    Class { negated: bool, ranges: Vec<(char, char)> },
}

impl Token {
    fn matches_char(&self, c: char) -> bool {
        match self {
            Token::Literal(literal) => *literal == c,
            Token::AnyChar => true,
            Token::AnyString => false,
            Token::Class { negated, ranges } => {
                ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi) != *negated
            }
        }
    }
}

// Split a glob into tokens. Returns `None` when the glob contains a class that
// cannot match any character (e.g. `[z-a]`).
fn parse_tokens(pattern: &str) -> Option<Vec<Token>> {
    let chars = pattern.chars().collect::<Vec<_>>();
    let mut tokens = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                // Consecutive stars are equivalent to one
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                tokens.push(Token::AnyString);
            }
            '?' => tokens.push(Token::AnyChar),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    tokens.push(parse_class(&chars[i..end])?);
                    i = end + 1;
                }
                None => tokens.push(Token::Literal('[')),
            },
            _ => tokens.push(Token::Literal(c)),
        }
    }
    Some(tokens)
}

// Find the index of the `]` closing a class whose body starts at `start`. A
// `]` directly after the opening bracket (or after `[!`) is a class member.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

fn parse_class(body: &[char]) -> Option<Token> {
    let (negated, members) = match body.split_first() {
        Some((&'!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut ranges = Vec::new();
    let mut k = 0;
    while k < members.len() {
        match (members.get(k + 1), members.get(k + 2)) {
            (Some(&'-'), Some(&hi)) => {
                let lo = members[k];
                // Reversed ranges are empty rather than an error
                if lo <= hi {
                    ranges.push((lo, hi));
                }
                k += 3;
            }
            _ => {
                ranges.push((members[k], members[k]));
                k += 1;
            }
        }
    }

    match (negated, ranges.is_empty()) {
        (true, true) => Some(Token::AnyChar),
        (false, true) => None,
        _ => Some(Token::Class { negated, ranges }),
    }
}

fn tokens_to_regex(tokens: &[Token]) -> Result<regex::Regex, regex::Error> {
    let mut regex = String::with_capacity(tokens.len() + 16);
    regex.push_str(r#"(?s)\A"#);
    for token in tokens {
        match token {
            Token::Literal(c) => push_literal(&mut regex, *c),
            Token::AnyChar => regex.push('.'),
            Token::AnyString => regex.push_str(".*"),
            Token::Class { negated, ranges } => {
                regex.push('[');
                if *negated {
                    regex.push('^');
                }
                for &(lo, hi) in ranges {
                    push_literal(&mut regex, lo);
                    if lo != hi {
                        regex.push('-');
                        push_literal(&mut regex, hi);
                    }
                }
                regex.push(']');
            }
        }
    }
    regex.push_str(r#"\z"#);
    regex::Regex::new(&regex)
}

// Linear-time matcher for when the pattern is too big to compile. Only the
// most recent `*` is ever backtracked to, which is enough since a later star
// can absorb anything an earlier one could.
fn tokens_match(tokens: &[Token], candidate: &str) -> bool {
    let candidate = candidate.chars().collect::<Vec<_>>();
    let mut token_idx = 0;
    let mut candidate_idx = 0;
    let mut reset_indices: Option<(usize, usize)> = None;
    while token_idx < tokens.len() || candidate_idx < candidate.len() {
        if let Some(token) = tokens.get(token_idx) {
            if *token == Token::AnyString {
                reset_indices = Some((token_idx, candidate_idx + 1));
                token_idx += 1;
                continue;
            }
            if let Some(&c) = candidate.get(candidate_idx) {
                if token.matches_char(c) {
                    token_idx += 1;
                    candidate_idx += 1;
                    continue;
                }
            }
        }

        if let Some((new_token_idx, new_candidate_idx)) = reset_indices {
            if new_candidate_idx <= candidate.len() {
                token_idx = new_token_idx;
                candidate_idx = new_candidate_idx;
                continue;
            }
        }

        return false;
    }

    true
}

fn push_literal(regex: &mut String, c: char) {
    if regex_syntax::is_meta_character(c) {
        regex.push('\\');
    }
    regex.push(c);
}

fn has_wildcard(mut char_iter: impl Iterator<Item = char>) -> bool {
    char_iter.any(|c| c == '*' || is_meta(c))
}

fn is_meta(c: char) -> bool {
    c == '?' || c == '['
}
