// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word occurrence counts.

use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from word to the number of times it occurs.
///
/// Iteration is in sorted word order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordMultiset(BTreeMap<String, usize>);

impl WordMultiset {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Count one more occurrence of `word`.
    pub fn insert(&mut self, word: impl Into<String>) {
        *self.0.entry(word.into()).or_insert(0) += 1;
    }

    pub fn count(&self, word: &str) -> usize {
        self.0.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Remove every word present in both multisets with the same count.
    ///
    /// Words whose counts differ stay in both.
    pub fn remove_matching(&mut self, other: &mut WordMultiset) {
        self.0.retain(|word, count| {
            if other.0.get(word) == Some(count) {
                other.0.remove(word);
                false
            } else {
                true
            }
        });
    }
}

impl<S: Into<String>> FromIterator<S> for WordMultiset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut multiset = WordMultiset::new();
        for word in iter {
            multiset.insert(word);
        }
        multiset
    }
}

#[cfg(test)]
#[path = "multiset_tests.rs"]
mod tests;
