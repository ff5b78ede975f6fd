//! # Model IO
//!
//! Models persist as UTF-8 JSON:
//! ```json
//! {
//!   "vocab_size": 5000,
//!   "merges": {
//!     "అ మ": "అమ",
//!     "అమ ్మ": "అమ్మ"
//!   },
//!   "vocab": ["అ", "అమ", "అమ్మ", "మ", "్", "్మ"]
//! }
//! ```
//!
//! `merges` entries are written, and read back, in learning order.
//!
//! ## Loading A Model
//!
//! ```rust,no_run
//! use telugu_bpe::{encoders::MergeReplayEncoder, vocab::io::load_model_path};
//!
//! fn example() -> telugu_bpe::TBResult<MergeReplayEncoder> {
//!     let model = load_model_path("telugu_bpe_model.json")?;
//!     Ok(MergeReplayEncoder::new(model))
//! }
//! ```

mod json_model_io;

#[doc(inline)]
pub use json_model_io::*;
