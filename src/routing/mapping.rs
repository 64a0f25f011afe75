//! Path to destination lookup table.

use std::collections::hash_map;
use std::collections::HashMap;

/// Mapping from request path to redirect destination.
///
/// Keys are unique. Inserting an existing path replaces its destination,
/// which is how duplicate entries in a redirect document collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    paths: HashMap<String, String>,
}

impl PathMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path, returning the destination it replaced, if any.
    pub fn insert(&mut self, path: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.paths.insert(path.into(), url.into())
    }

    /// Look up the destination for an exact path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over `(path, destination)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Pairs sorted by path, for stable output.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

impl<P, U> FromIterator<(P, U)> for PathMapping
where
    P: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<P, U> Extend<(P, U)> for PathMapping
where
    P: Into<String>,
    U: Into<String>,
{
    fn extend<I: IntoIterator<Item = (P, U)>>(&mut self, iter: I) {
        for (path, url) in iter {
            self.insert(path, url);
        }
    }
}

impl IntoIterator for PathMapping {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
