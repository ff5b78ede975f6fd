//! # Preprocessing
//!
//! Normalizes raw text into the canonical stream the learner and encoders consume:
//! Telugu script and ASCII digits only, with digit runs and vowel signs isolated
//! as their own whitespace-delimited words.
//!
//! ```rust
//! use telugu_bpe::preprocess::preprocess;
//!
//! assert_eq!(preprocess("Hello, నాన్న!"), "న ాన్న");
//! ```

mod telugu_normalizer;

#[doc(inline)]
pub use telugu_normalizer::*;
