//! # Tokenization Reports

use core::fmt;

use serde::Serialize;

use crate::{
    encoders::SymbolEncoder,
    errors::{TBResult, TeluguBpeError},
    preprocess::preprocess,
    segmentation::WordCounter,
    types::Symbol,
};

/// Ratio of `numerator / denominator`; 0 when `denominator` is 0.
fn ratio(
    numerator: usize,
    denominator: usize,
) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// The result of tokenizing one user-supplied text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenizationReport {
    /// The preprocessed text.
    pub preprocessed_text: String,

    /// The encoded tokens.
    pub tokens: Vec<Symbol>,

    /// Codepoints of the preprocessed text, spaces included.
    pub char_count: usize,

    /// The number of tokens.
    pub token_count: usize,

    /// ``char_count / token_count``; 0 when there are no tokens.
    pub compression_ratio: f64,

    /// The achieved vocabulary size of the model.
    pub vocab_size: usize,
}

impl TokenizationReport {
    /// Preprocess and encode `text`.
    ///
    /// ## Errors
    /// * [`TeluguBpeError::EmptyInput`] - when `text` is blank.
    pub fn build<E: SymbolEncoder + ?Sized>(
        encoder: &E,
        text: &str,
    ) -> TBResult<Self> {
        if text.trim().is_empty() {
            return Err(TeluguBpeError::EmptyInput);
        }

        let preprocessed_text = preprocess(text);
        let tokens = encoder.encode(&preprocessed_text);

        let char_count = preprocessed_text.chars().count();
        let token_count = tokens.len();

        Ok(Self {
            preprocessed_text,
            tokens,
            char_count,
            token_count,
            compression_ratio: ratio(char_count, token_count),
            vocab_size: encoder.model().vocab_len(),
        })
    }
}

impl fmt::Display for TokenizationReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Preprocessed Text: {}", self.preprocessed_text)?;
        writeln!(f, "Tokens: {}", self.tokens.join(" | "))?;
        writeln!(f, "Character Count: {}", self.char_count)?;
        writeln!(f, "Token Count: {}", self.token_count)?;
        writeln!(f, "Compression Ratio: {:.2}x", self.compression_ratio)?;
        write!(f, "Vocabulary Size: {}", self.vocab_size)
    }
}

/// Compression statistics of a model over a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionStats {
    /// Codepoints of the preprocessed corpus, spaces included.
    pub original_chars: usize,

    /// Codepoints of the preprocessed corpus, whitespace excluded.
    pub symbol_chars: usize,

    /// Words of the preprocessed corpus.
    pub words: usize,

    /// Tokens of the encoded corpus.
    pub tokens: usize,

    /// ``original_chars / tokens``; 0 when there are no tokens.
    pub compression_ratio: f64,

    /// The achieved vocabulary size of the model.
    pub vocab_size: usize,
}

impl CompressionStats {
    /// Measure `encoder` over a raw corpus.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(encoder, corpus)))]
    pub fn measure<E: SymbolEncoder + ?Sized>(
        encoder: &E,
        corpus: &str,
    ) -> Self {
        let preprocessed = preprocess(corpus);

        let mut counter = WordCounter::new();
        counter.update_from_text(&preprocessed);

        let original_chars = preprocessed.chars().count();
        let tokens = encoder.encode(&preprocessed).len();

        Self {
            original_chars,
            symbol_chars: preprocessed.chars().filter(|c| !c.is_whitespace()).count(),
            words: counter.total_words(),
            tokens,
            compression_ratio: ratio(original_chars, tokens),
            vocab_size: encoder.model().vocab_len(),
        }
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "chars={} symbols={} words={} tokens={} ratio={:.2}x vocab={}",
            self.original_chars,
            self.symbol_chars,
            self.words,
            self.tokens,
            self.compression_ratio,
            self.vocab_size
        )
    }
}
