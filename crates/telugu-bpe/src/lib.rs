//! # `telugu-bpe` Subword Tokenizer
//!
//! A byte-pair-encoding style subword tokenizer specialized for Telugu text.
//!
//! See:
//! * [`preprocess`] to normalize raw text into whitespace-delimited words.
//! * [`training`] to learn a [`vocab::BpeModel`] from preprocessed text.
//! * [`encoders`] to replay a model's merges over new text.
//! * [`vocab`] for the model, its merge rules, and model io.
//!
//! [`TeluguTokenizer`] bundles all of the above over one shared model.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::TBHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! Batch encoding runs over the ``rayon`` thread pool.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Training And Encoding
//!
//! ```rust
//! use telugu_bpe::{TeluguTokenizer, training::VocabLearnerOptions};
//!
//! let tokenizer = TeluguTokenizer::train(
//!     "అమ్మ అమ్మ నాన్న",
//!     VocabLearnerOptions::new(20),
//! )
//! .unwrap();
//!
//! assert_eq!(tokenizer.encode("Hello అమ్మ"), vec!["అమ్మ"]);
//! assert!(tokenizer.encode("").is_empty());
//! ```
#![warn(missing_docs, unused)]

pub mod encoders;
pub mod preprocess;
pub mod report;
pub mod segmentation;
pub mod training;
pub mod types;
pub mod vocab;

mod errors;
mod tokenizer;

#[doc(inline)]
pub use errors::*;
#[doc(inline)]
pub use tokenizer::*;
