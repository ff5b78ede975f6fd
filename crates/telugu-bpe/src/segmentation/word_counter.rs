//! # Word Counter

use compact_str::CompactString;

use crate::{
    segmentation::WordSpan,
    types::{TBHashMap, hash_map_with_capacity},
};

/// Split preprocessed text into per-codepoint [`WordSpan`]s, in text order.
///
/// Every occurrence is kept; words are delimited by whitespace runs.
pub fn split_words<S: AsRef<str>>(text: S) -> Vec<WordSpan> {
    text.as_ref()
        .split_whitespace()
        .map(WordSpan::from_word)
        .collect()
}

/// Counts word occurrences of preprocessed text.
///
/// Pair frequencies computed over the unique words, weighted by these counts,
/// are exactly the per-occurrence sums over the corpus.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    word_counts: TBHashMap<CompactString, usize>,
}

impl WordCounter {
    /// Create a new word counter.
    pub fn new() -> Self {
        Self {
            word_counts: hash_map_with_capacity(1024),
        }
    }

    /// Update word counts inplace from preprocessed text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in text.as_ref().split_whitespace() {
            *self.word_counts.entry(word.into()).or_default() += 1;
        }
    }

    /// The number of unique words.
    pub fn unique_words(&self) -> usize {
        self.word_counts.len()
    }

    /// The number of word occurrences.
    pub fn total_words(&self) -> usize {
        self.word_counts.values().sum()
    }

    /// The count of a word.
    pub fn count(
        &self,
        word: &str,
    ) -> usize {
        self.word_counts.get(word).copied().unwrap_or_default()
    }

    /// Convert to ``(WordSpan, count)`` pairs, sorted by word.
    pub fn to_word_span_counts(&self) -> (Vec<WordSpan>, Vec<usize>) {
        let mut items: Vec<(&CompactString, usize)> =
            self.word_counts.iter().map(|(w, &c)| (w, c)).collect();
        items.sort();

        items
            .into_iter()
            .map(|(w, c)| (WordSpan::from_word(w), c))
            .unzip()
    }
}
