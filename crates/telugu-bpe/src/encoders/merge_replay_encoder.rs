//! # Merge Replay Encoder

use std::sync::Arc;

use crate::{
    encoders::SymbolEncoder,
    segmentation::{WordSpan, split_words},
    types::Symbol,
    vocab::{BpeModel, MergeList},
};

/// Replay `rules` over `words`, one rule at a time, in list order.
///
/// Each rule is a full greedy pass over every word before the next rule runs.
///
/// ## Returns
/// The number of merges applied.
pub fn replay_merges(
    words: &mut [WordSpan],
    rules: &MergeList,
) -> usize {
    let mut merges = 0;
    for rule in rules {
        let pair = rule.pair();
        for word in words.iter_mut() {
            if word.len() >= 2 {
                merges += word.merge_pair_cb(&pair, rule.merged(), &mut |_, _| {});
            }
        }
    }
    merges
}

/// Encode preprocessed text by replaying `rules`.
///
/// ## Arguments
/// * `text` - preprocessed text; see [`crate::preprocess::preprocess`].
/// * `rules` - the ordered merge rules.
///
/// ## Returns
/// The tokens of every word, flattened in word order.
pub fn encode<S: AsRef<str>>(
    text: S,
    rules: &MergeList,
) -> Vec<Symbol> {
    let mut words = split_words(text);
    replay_merges(&mut words, rules);
    words.into_iter().flat_map(WordSpan::into_symbols).collect()
}

/// A [`SymbolEncoder`] which replays a model's merges in learning order.
#[derive(Debug, Clone)]
pub struct MergeReplayEncoder {
    model: Arc<BpeModel>,
}

impl MergeReplayEncoder {
    /// Construct an encoder for a model.
    pub fn new<M: Into<Arc<BpeModel>>>(model: M) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// The shared model.
    pub fn model_arc(&self) -> &Arc<BpeModel> {
        &self.model
    }
}

impl SymbolEncoder for MergeReplayEncoder {
    fn model(&self) -> &BpeModel {
        &self.model
    }

    fn encode_words(
        &self,
        words: &mut [WordSpan],
    ) -> usize {
        replay_merges(words, self.model.merges())
    }
}
