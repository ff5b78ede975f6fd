//! # Vocab Learner

use core::cmp::Ordering;
use std::collections::BTreeSet;

use dary_heap::OctonaryHeap;

use crate::{
    segmentation::{WordCounter, WordSpan},
    training::{PairIndex, PairIndexMap},
    types::{Pair, Symbol, TBHashSet, concat_pair, hash_map_with_capacity},
    vocab::{BpeModel, MergeList, MergeRule},
};

/// The default target vocabulary size.
pub const DEFAULT_VOCAB_SIZE: usize = 5000;

/// Options for [`VocabLearner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabLearnerOptions {
    /// The target vocab size.
    pub vocab_size: usize,

    /// The minimum count for a pair to be merged.
    ///
    /// Learning stops early once the best remaining pair is below this.
    pub min_frequency: usize,
}

impl Default for VocabLearnerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VOCAB_SIZE)
    }
}

impl VocabLearnerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            min_frequency: 1,
        }
    }

    /// Sets the vocab size.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the minimum merge frequency; values below 1 are raised to 1.
    pub fn with_min_frequency(
        self,
        min_frequency: usize,
    ) -> Self {
        Self {
            min_frequency: min_frequency.max(1),
            ..self
        }
    }

    /// Initializes a [`VocabLearner`] from these options.
    pub fn init(self) -> VocabLearner {
        VocabLearner::new(self)
    }
}

/// Info about a [`Pair`] that could be merged.
#[derive(Debug, Eq)]
pub struct MergeJob {
    /// The number of occurrences of this pair in the corpus.
    pub count: usize,

    /// The pair to merge.
    pub pair: Pair,

    /// The concatenation of the pair.
    pub merged: Symbol,

    /// Word indices that may contain this pair.
    pub word_indices: TBHashSet<usize>,
}

impl MergeJob {
    fn new(
        pair: Pair,
        count: usize,
        word_indices: TBHashSet<usize>,
    ) -> Self {
        let merged = concat_pair(&pair.0, &pair.1);
        Self {
            count,
            pair,
            merged,
            word_indices,
        }
    }
}

impl PartialEq for MergeJob {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for MergeJob {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MergeJob {
    /// Max-heap order.
    ///
    /// Highest count first; ties go to the lexicographically smallest
    /// concatenation, then to the smallest left symbol.
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.merged.cmp(&self.merged))
            .then_with(|| other.pair.0.cmp(&self.pair.0))
    }
}

/// Learns an ordered list of merges from preprocessed text.
///
/// The corpus is held as unique words with occurrence counts;
/// so pair counts are weighted by how often each word occurs.
#[derive(Debug, Clone)]
pub struct VocabLearner {
    /// Learner options.
    pub options: VocabLearnerOptions,

    /// The word counter.
    pub word_counter: WordCounter,
}

impl VocabLearner {
    /// Initializes a [`VocabLearner`].
    pub fn new(options: VocabLearnerOptions) -> Self {
        Self {
            options,
            word_counter: WordCounter::new(),
        }
    }

    /// Update word counts inplace from preprocessed text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.word_counter.update_from_text(text);
    }

    /// Update word counts inplace from an iterator of preprocessed samples.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Learns a [`BpeModel`].
    ///
    /// Repeatedly merges the most frequent adjacent pair until the vocabulary
    /// reaches `vocab_size`, or no mergeable pair remains. A pair whose
    /// concatenation is already a vocabulary symbol is passed over; so every
    /// merge adds exactly one symbol.
    ///
    /// An empty corpus yields an empty model.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn learn(self) -> BpeModel {
        let (mut words, counts): (Vec<WordSpan>, Vec<usize>) =
            self.word_counter.to_word_span_counts();

        let mut vocab: BTreeSet<Symbol> = words
            .iter()
            .flat_map(|w| w.symbols().iter().cloned())
            .collect();

        let num_merges = self.options.vocab_size.saturating_sub(vocab.len());
        log::info!(
            "Starting BPE learning: {} unique words, {} initial symbols, {} merges to compute",
            words.len(),
            vocab.len(),
            num_merges
        );

        let PairIndex {
            mut pair_counts,
            pair_index,
        } = PairIndex::from_word_count_table(&words, &counts);

        // ---- Build heap ----
        log::info!("Building heap with {} unique pairs", pair_counts.len());
        let mut heap = OctonaryHeap::with_capacity(pair_counts.len());
        for (pair, word_indices) in pair_index {
            let count = pair_counts.get(&pair).copied().unwrap_or_default();
            if count > 0 {
                heap.push(MergeJob::new(pair, count, word_indices));
            }
        }

        // ---- Merge loop ----
        let mut merges = MergeList::with_capacity(num_merges);
        let mut last_log_percent = 0;

        while merges.len() < num_merges {
            let Some(mut job) = heap.pop() else {
                // No more pairs to merge
                break;
            };

            {
                // Lazy refresh the job count.
                let current = pair_counts.get(&job.pair).copied().unwrap_or_default();
                if job.count != current {
                    job.count = current;
                    if job.count > 0 {
                        heap.push(job);
                    }
                    continue;
                }
            }

            if job.count == 0 || job.count < self.options.min_frequency {
                log::info!(
                    "Stopping early: best pair {:?} has count {} (min_frequency={})",
                    job.pair,
                    job.count,
                    self.options.min_frequency
                );
                break;
            }

            if vocab.contains(&job.merged) {
                log::debug!("Skipping {:?}: {:?} is already a symbol", job.pair, job.merged);
                continue;
            }

            vocab.insert(job.merged.clone());
            merges.push(MergeRule::new(job.pair.0.clone(), job.pair.1.clone()));

            let mut new_symbol_pair_map: PairIndexMap = hash_map_with_capacity(16);

            // Merge this pair in all words where it occurs
            for &word_idx in &job.word_indices {
                let weight = counts[word_idx];
                words[word_idx].merge_pair_cb(&job.pair, &job.merged, &mut |pair, delta| {
                    let count = pair_counts.entry(pair.clone()).or_default();
                    if delta < 0 {
                        // This (a, b) window was removed from this word.
                        *count -= weight;
                    } else {
                        // This (a, b) window was added to this word;
                        // and either a or b is the new symbol.
                        *count += weight;
                        new_symbol_pair_map.entry(pair).or_default().insert(word_idx);
                    }
                });
            }

            // Every pair with the new symbol is new; none are in the heap yet.
            for (pair, word_indices) in new_symbol_pair_map {
                let count = pair_counts.get(&pair).copied().unwrap_or_default();
                if count > 0 {
                    heap.push(MergeJob::new(pair, count, word_indices));
                }
            }

            // Log progress every 1%
            let current_percent = (merges.len() * 100) / num_merges;
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} -> {:?} (frequency: {})",
                    current_percent,
                    merges.len(),
                    num_merges,
                    job.pair,
                    job.merged,
                    job.count
                );
                last_log_percent = current_percent;
            }
        }

        log::info!(
            "Finished learning: {} merges, vocabulary size {}",
            merges.len(),
            vocab.len()
        );

        BpeModel::new(self.options.vocab_size, merges, vocab)
    }
}

/// Learn a [`BpeModel`] from preprocessed text.
///
/// ## Arguments
/// * `text` - preprocessed text; see [`crate::preprocess::preprocess`].
/// * `vocab_size` - the target vocabulary size.
pub fn learn<S: AsRef<str>>(
    text: S,
    vocab_size: usize,
) -> BpeModel {
    let mut learner = VocabLearnerOptions::new(vocab_size).init();
    learner.update_from_text(text);
    learner.learn()
}
