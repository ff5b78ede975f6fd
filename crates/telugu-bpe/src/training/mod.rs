//! # Vocabulary Learning
//!
//! Learns an ordered list of merge rules from preprocessed text.
//!
//! ## Example
//!
//! ```rust
//! use telugu_bpe::{preprocess::preprocess, training::VocabLearnerOptions};
//!
//! let mut learner = VocabLearnerOptions::new(64).init();
//! learner.update_from_text(preprocess("అమ్మ అమ్మ నాన్న"));
//! let model = learner.learn();
//!
//! assert_eq!(model.merges().as_slice()[0].key(), "అ మ");
//! ```

mod pair_index;
mod vocab_learner;

#[doc(inline)]
pub use pair_index::*;
#[doc(inline)]
pub use vocab_learner::*;
