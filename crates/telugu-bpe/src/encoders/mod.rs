//! # Symbol Encoders
//!
//! Encoding replays a model's merge rules, strictly in learning order,
//! over the words of preprocessed text.
//!
//! ## Example
//!
//! ```rust
//! use telugu_bpe::{
//!     encoders::{MergeReplayEncoder, SymbolEncoder},
//!     preprocess::preprocess,
//!     training::learn,
//! };
//!
//! let text = preprocess("అమ్మ అమ్మ నాన్న");
//! let encoder = MergeReplayEncoder::new(learn(&text, 20));
//!
//! let tokens = encoder.encode(preprocess("అమ్మ"));
//! assert_eq!(tokens, vec!["అమ్మ"]);
//! ```

mod merge_replay_encoder;
mod symbol_encoder;

#[doc(inline)]
pub use merge_replay_encoder::*;
#[doc(inline)]
pub use symbol_encoder::*;
