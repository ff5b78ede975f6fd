//! # BPE Model

use std::{collections::BTreeSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    errors::TBResult,
    types::Symbol,
    vocab::{MergeList, io},
};

/// A trained model: the unit of persistence.
///
/// * `vocab_size` - the target vocabulary size used at training time;
///   not necessarily the achieved size.
/// * `merges` - the ordered merge rules.
/// * `vocab` - every symbol ever created: the initial characters,
///   and every merge result.
///
/// Read-only once built; share it behind an `Arc` to encode concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpeModel {
    vocab_size: usize,
    merges: MergeList,
    vocab: BTreeSet<Symbol>,
}

impl BpeModel {
    /// Assemble a model.
    pub fn new(
        vocab_size: usize,
        merges: MergeList,
        vocab: BTreeSet<Symbol>,
    ) -> Self {
        Self {
            vocab_size,
            merges,
            vocab,
        }
    }

    /// The target vocabulary size used at training time.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// The ordered merge rules.
    pub fn merges(&self) -> &MergeList {
        &self.merges
    }

    /// The vocabulary set.
    pub fn vocab(&self) -> &BTreeSet<Symbol> {
        &self.vocab
    }

    /// The achieved vocabulary size.
    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }

    /// Is `symbol` in the vocabulary?
    pub fn contains(
        &self,
        symbol: &str,
    ) -> bool {
        self.vocab.contains(symbol)
    }

    /// The single-codepoint symbols of the vocabulary.
    pub fn alphabet(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.vocab.iter().filter(|s| s.chars().nth(1).is_none())
    }

    /// Load a model from a JSON model file.
    ///
    /// See [`io::load_model_path`].
    pub fn load<P: AsRef<Path>>(path: P) -> TBResult<Self> {
        io::load_model_path(path)
    }

    /// Save this model to a JSON model file.
    ///
    /// See [`io::save_model_path`].
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> TBResult<()> {
        io::save_model_path(self, path)
    }
}
