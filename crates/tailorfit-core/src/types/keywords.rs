use std::collections::BTreeSet;
use std::collections::btree_set;

use serde::{Deserialize, Serialize};

/// A deduplicated set of lower-cased keywords.
///
/// Entries are normalized on insertion, so membership is case-insensitive
/// by construction. Empty strings and strings without any alphanumeric
/// character are rejected. Iteration is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-cases and inserts `keyword`. Returns `true` if it was newly added.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if !keyword.chars().any(char::is_alphanumeric) {
            return false;
        }
        self.0.insert(keyword.to_lowercase())
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(&keyword.trim().to_lowercase())
    }

    /// Adds every keyword of `other` to this set.
    pub fn union_with(&mut self, other: &KeywordSet) {
        self.0.extend(other.0.iter().cloned());
    }

    /// Keywords in `self` that are absent from `other`, in lexicographic order.
    #[must_use]
    pub fn missing_from(&self, other: &KeywordSet) -> Vec<String> {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Returns `true` if every keyword of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &KeywordSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.insert(keyword.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(keywords: Vec<String>) -> Self {
        keywords.into_iter().collect()
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0.into_iter().collect()
    }
}

impl IntoIterator for KeywordSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
