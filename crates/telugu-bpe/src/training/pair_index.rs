//! # `PairIndex` Builder

use crate::{
    segmentation::WordSpan,
    types::{Pair, TBHashMap, TBHashSet, hash_map_with_capacity},
};

/// A map from [`Pair`] to its occurrence count.
pub type PairCountMap = TBHashMap<Pair, usize>;

/// A map from [`Pair`] to indices over ``words``.
pub type PairIndexMap = TBHashMap<Pair, TBHashSet<usize>>;

/// An index of adjacent-pair information relative to a ``&[WordSpan]``.
#[derive(Debug, Clone, Default)]
pub struct PairIndex {
    /// A map from [`Pair`] to its occurrence count.
    ///
    /// ``sum(words[i].window_count(pair) * counts[i]) for all i``
    pub pair_counts: PairCountMap,

    /// A map from [`Pair`] to word indices.
    pub pair_index: PairIndexMap,
}

impl PairIndex {
    /// Build a [`PairIndex`] from a slice of [`WordSpan`]s, using a count table.
    ///
    /// # Arguments
    /// * `words` - a sequence of words.
    /// * `counts` - `counts[i]` is the occurrence count of `words[i]`.
    pub fn from_word_count_table(
        words: &[WordSpan],
        counts: &[usize],
    ) -> Self {
        let size_hint = words.len();

        let mut index = PairIndex {
            pair_counts: hash_map_with_capacity(size_hint),
            pair_index: hash_map_with_capacity(size_hint),
        };

        for (idx, word) in words.iter().enumerate() {
            let count = counts[idx];

            if count != 0 && word.len() >= 2 {
                for (a, b) in word.pairs() {
                    let pair: Pair = (a.clone(), b.clone());
                    *index.pair_counts.entry(pair.clone()).or_default() += count;
                    index.pair_index.entry(pair).or_default().insert(idx);
                }
            }
        }

        index
    }
}
