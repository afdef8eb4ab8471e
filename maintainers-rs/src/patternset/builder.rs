use super::{Glob, Matcher};

/// Builder for a patternset [`Matcher`]. Calling [`Builder::build`] will
/// consume the builder.
#[derive(Clone, Default)]
pub struct Builder {
    globs: Vec<Glob>,
}

impl Builder {
    /// Create a new `Builder`.
    pub fn new() -> Self {
        Self { globs: Vec::new() }
    }

    /// Add a pattern to the builder, returning its id. Ids start at zero and
    /// follow the order in which patterns were added.
    pub fn add(&mut self, pattern: &str) -> usize {
        let pattern_id = self.globs.len();
        self.globs.push(Glob::new(pattern));
        pattern_id
    }

    pub fn len(&self) -> usize {
        self.globs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    /// Build the `Matcher` from the patterns added to the builder. This will
    /// consume the builder.
    pub fn build(self) -> Matcher {
        Matcher::new(self.globs)
    }
}

impl<'a> FromIterator<&'a str> for Builder {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut builder = Builder::new();
        for pattern in iter {
            builder.add(pattern);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut builder = Builder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.add("src/*"), 0);
        assert_eq!(builder.add("docs/*"), 1);
        assert_eq!(builder.add("src/*"), 2);
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_collect() {
        let builder = ["a", "b*"].into_iter().collect::<Builder>();
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.build().matching_patterns("bob"), vec![1]);
    }
}
