//! # Symbol Encoder Trait

use crate::{
    segmentation::{WordSpan, split_words},
    types::Symbol,
    vocab::BpeModel,
};

/// A trait for encoders of preprocessed text into [`Symbol`] tokens.
pub trait SymbolEncoder: Send + Sync {
    /// Return the attached model.
    fn model(&self) -> &BpeModel;

    /// Rewrite a batch of words inplace.
    ///
    /// ## Arguments
    /// * `words` - the words, in text order.
    ///
    /// ## Returns
    /// The number of merges applied.
    fn encode_words(
        &self,
        words: &mut [WordSpan],
    ) -> usize;

    /// Encode preprocessed text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - preprocessed text.
    /// * `tokens` - the target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<Symbol>,
    ) {
        let mut words = split_words(text);
        self.encode_words(&mut words);
        tokens.extend(words.into_iter().flat_map(WordSpan::into_symbols));
    }

    /// Encode preprocessed text into tokens.
    ///
    /// Empty text yields no tokens.
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<Symbol> {
        let text = text.as_ref();
        let mut tokens = Vec::with_capacity(text.len() / 4);
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of preprocessed texts.
    ///
    /// With the `rayon` feature the batch is spread over the rayon pool.
    fn encode_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<Symbol>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "rayon")]
        let tokens: Vec<Vec<Symbol>> = {
            use rayon::prelude::*;
            batch.par_iter().map(|text| self.encode(text)).collect()
        };

        #[cfg(not(feature = "rayon"))]
        let tokens: Vec<Vec<Symbol>> = batch.iter().map(|text| self.encode(text)).collect();

        tokens
    }
}
