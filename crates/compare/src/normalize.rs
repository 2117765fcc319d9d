// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization into comparable words.

/// Noise fragments stripped from every word by default: shell prompts,
/// the echoed end-of-input marker, and the `exit` command.
pub const DEFAULT_STOP_WORDS: &[&str] = &["jsh>", "jsh >", "^d", "exit", " "];

/// Splits text into lower-case words with noise fragments removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalizer {
    stop_words: Vec<String>,
}

impl Normalizer {
    /// Create a normalizer. Stop words are lower-cased; empty ones are ignored.
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn stop_words(&self) -> &[String] {
        &self.stop_words
    }

    /// Strip every stop word from `word`.
    ///
    /// Removal repeats until no stop word is left, since deleting one
    /// fragment can join the halves of another. A single pass would turn
    /// `exexitit` into `exit`; repeating turns it into the empty string, so
    /// cleaning an already cleaned word never changes it.
    pub fn clean_word(&self, word: &str) -> String {
        let mut word = word.to_string();
        loop {
            let mut changed = false;
            for stop in &self.stop_words {
                if word.contains(stop.as_str()) {
                    word = word.replace(stop.as_str(), "");
                    changed = true;
                }
            }
            if !changed {
                return word;
            }
        }
    }

    /// Lower-case, trim and split `text`, then clean each word and drop the
    /// ones that end up empty.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(|token| self.clean_word(token))
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// The normalized words joined by single spaces.
    pub fn normalize(&self, text: &str) -> String {
        self.words(text).join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
