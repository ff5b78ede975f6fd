//! # Word Span

use crate::types::{Pair, Symbol, concat_pair};

/// A mutable span of symbols (one whitespace-delimited "word").
///
/// Starts as one symbol per codepoint, and is rewritten by merges;
/// the sequence shrinks as its symbols lengthen.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordSpan {
    symbols: Vec<Symbol>,
}

impl<S: AsRef<str>> From<S> for WordSpan {
    fn from(word: S) -> Self {
        Self::from_word(word)
    }
}

impl WordSpan {
    const DEC: isize = -1;
    const INC: isize = 1;

    /// Split a word into single-codepoint symbols.
    pub fn from_word<S: AsRef<str>>(word: S) -> Self {
        let word = word.as_ref();
        let mut buf = [0u8; 4];
        Self {
            symbols: word
                .chars()
                .map(|c| Symbol::from(&*c.encode_utf8(&mut buf)))
                .collect(),
        }
    }

    /// Create a span from existing symbols.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Release the symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over adjacent symbol windows of this span.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Merge all non-overlapping occurrences of `pair`, scanning left to right.
    ///
    /// A freshly merged symbol is not re-scanned against its successor in the
    /// same pass.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `merged` - the symbol to replace `pair` with.
    /// * `on_merge` - a callback invoked for each incremental pair delta:
    ///   `+1` for an added window, `-1` for a removed window.
    ///
    /// # Returns
    /// The number of merges applied.
    pub fn merge_pair_cb<F>(
        &mut self,
        pair: &Pair,
        merged: &Symbol,
        on_merge: &mut F,
    ) -> usize
    where
        F: FnMut(Pair, isize),
    {
        let (a, b) = pair;
        let n = self.symbols.len();

        if n < 2 {
            return 0;
        }

        let mut merges = 0;
        let mut new_symbols: Vec<Symbol> = Vec::with_capacity(n);

        let mut i = 0;
        while i < n {
            let current = &self.symbols[i];

            if i + 1 < n && current == a && &self.symbols[i + 1] == b {
                // Remove Previous Pair?
                if let Some(x) = new_symbols.last() {
                    on_merge((x.clone(), a.clone()), Self::DEC);
                    on_merge((x.clone(), merged.clone()), Self::INC);
                }

                // Remove Current Pair.
                on_merge(pair.clone(), Self::DEC);

                // Remove Next Pair?
                if i + 2 < n {
                    let y = &self.symbols[i + 2];
                    on_merge((b.clone(), y.clone()), Self::DEC);
                    on_merge((merged.clone(), y.clone()), Self::INC);
                }

                new_symbols.push(merged.clone());
                merges += 1;

                // Skip 'a' and 'b'.
                i += 2;
            } else {
                new_symbols.push(current.clone());
                i += 1;
            }
        }

        self.symbols = new_symbols;
        merges
    }

    /// Merge all non-overlapping occurrences of `pair` into their concatenation.
    ///
    /// # Returns
    /// The number of merges applied.
    pub fn merge_pair(
        &mut self,
        pair: &Pair,
    ) -> usize {
        if self.symbols.len() < 2 {
            return 0;
        }
        let merged = concat_pair(&pair.0, &pair.1);
        self.merge_pair_cb(pair, &merged, &mut |_, _| {})
    }
}
