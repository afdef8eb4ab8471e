use super::Glob;

/// Matches a path against a set of patterns. Created using a
/// [`super::Builder`].
#[derive(Clone, Debug)]
pub struct Matcher {
    globs: Vec<Glob>,
}

impl Matcher {
    pub(crate) fn new(globs: Vec<Glob>) -> Matcher {
        Self { globs }
    }

    /// Ids of the patterns matching `path`, in the order the patterns were
    /// added to the builder. The path is matched verbatim.
    pub fn matching_patterns(&self, path: &str) -> Vec<usize> {
        self.globs
            .iter()
            .enumerate()
            .filter(|(_, glob)| glob.is_match(path))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.globs.iter().any(|glob| glob.is_match(path))
    }

    pub fn pattern(&self, id: usize) -> Option<&str> {
        self.globs.get(id).map(Glob::pattern)
    }

    pub fn len(&self) -> usize {
        self.globs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }
}
