// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multiset equivalence of two captured outputs.

use crate::{Normalizer, WordMultiset};
use serde::Serialize;
use std::collections::BTreeSet;

/// Words left over after matching pairs were removed from both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub reference_only: WordMultiset,
    pub candidate_only: WordMultiset,
}

impl Comparison {
    /// True when nothing was left on either side.
    pub fn is_equivalent(&self) -> bool {
        self.reference_only.is_empty() && self.candidate_only.is_empty()
    }

    /// Every word that did not match, from either side.
    pub fn mismatched_words(&self) -> BTreeSet<&str> {
        self.reference_only
            .words()
            .chain(self.candidate_only.words())
            .collect()
    }
}

/// Compares texts as multisets of normalized words.
#[derive(Clone, Debug, Default)]
pub struct MultisetComparator {
    normalizer: Normalizer,
}

impl MultisetComparator {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalize `text` and count its words.
    pub fn multiset(&self, text: &str) -> WordMultiset {
        self.normalizer.words(text).into_iter().collect()
    }

    /// Diff two texts, keeping the unmatched words of each side.
    pub fn compare(&self, reference: &str, candidate: &str) -> Comparison {
        let mut reference_only = self.multiset(reference);
        let mut candidate_only = self.multiset(candidate);
        reference_only.remove_matching(&mut candidate_only);
        Comparison {
            reference_only,
            candidate_only,
        }
    }

    pub fn equivalent(&self, reference: &str, candidate: &str) -> bool {
        self.compare(reference, candidate).is_equivalent()
    }
}

#[cfg(test)]
#[path = "comparator_tests.rs"]
mod tests;
