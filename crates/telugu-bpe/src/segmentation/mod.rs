//! # Word Segmentation
//!
//! Splits preprocessed text into [`WordSpan`]s, and holds the pair-merge
//! primitive shared by [`crate::training`] and [`crate::encoders`].

mod word_counter;
mod word_span;

#[doc(inline)]
pub use word_counter::{WordCounter, split_words};
#[doc(inline)]
pub use word_span::WordSpan;
