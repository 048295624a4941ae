//! The candidate word collection and the filters that narrow it down.
//!
//! Every filter is all-or-nothing: the surviving subsequence is computed first
//! and only replaces the collection when it is non-empty.

use crate::debug_log;
use crate::error::FilterError;

/// Mask character that matches any single code point.
pub const MASK_WILDCARD: char = '-';

/// A single narrowing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Keep words whose stored length equals the value.
    ExactLength(i64),
    /// Keep words whose stored length lies in `min..=max`.
    LengthRange { min: i64, max: i64 },
    /// Positional template; `inverted` keeps everything that does not match.
    Mask { pattern: Vec<char>, inverted: bool },
    /// Required letters, or forbidden letters when `inverted`.
    Letters { letters: Vec<char>, inverted: bool },
}

impl Filter {
    pub fn mask(pattern: &str, inverted: bool) -> Self {
        Self::Mask {
            pattern: pattern.chars().collect(),
            inverted,
        }
    }

    pub fn letters(letters: &str, inverted: bool) -> Self {
        Self::Letters {
            letters: letters.chars().collect(),
            inverted,
        }
    }

    /// Whether `word` survives this filter.
    ///
    /// Lengths are measured in UTF-8 bytes of the stored text while masks and
    /// letters compare code points.
    #[must_use]
    pub fn keeps(&self, word: &str) -> bool {
        match self {
            Self::ExactLength(exact) => byte_len(word) == *exact,
            Self::LengthRange { min, max } => {
                let len = byte_len(word);
                len >= *min && len <= *max
            }
            Self::Mask { pattern, inverted } => mask_matches(pattern, word) != *inverted,
            Self::Letters { letters, inverted } => {
                if *inverted {
                    !letters.iter().any(|&c| word.contains(c))
                } else {
                    letters.iter().all(|&c| word.contains(c))
                }
            }
        }
    }
}

#[allow(clippy::cast_possible_wrap)]
fn byte_len(word: &str) -> i64 {
    word.len() as i64
}

/// A word of a different code-point length never matches.
fn mask_matches(pattern: &[char], word: &str) -> bool {
    if word.chars().count() != pattern.len() {
        return false;
    }
    pattern
        .iter()
        .zip(word.chars())
        .all(|(&m, c)| m == MASK_WILDCARD || m == c)
}

/// Ordered, duplicate-tolerant collection of candidate words.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Appends loaded words in order. Loading never goes through the sanity check.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        self.words.extend(words);
    }

    /// Drops every word. The only way to end up with an empty collection after loading.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Applies `filter`, returning the new size.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NoWordsLeft`] and leaves the collection untouched
    /// when no word would survive.
    pub fn apply(&mut self, filter: &Filter) -> Result<usize, FilterError> {
        let kept: Vec<String> = self
            .words
            .iter()
            .filter(|word| filter.keeps(word))
            .cloned()
            .collect();

        if kept.is_empty() {
            debug_log!("apply() - {:?} would empty {} words, rejected", filter, self.words.len());
            return Err(FilterError::NoWordsLeft);
        }

        debug_log!("apply() - {:?} kept {} of {} words", filter, kept.len(), self.words.len());
        self.words = kept;
        Ok(self.words.len())
    }
}

impl From<Vec<String>> for WordSet {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}
