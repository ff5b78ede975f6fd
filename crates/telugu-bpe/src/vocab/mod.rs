//! # Vocabulary Models
//!
//! * [`MergeRule`] / [`MergeList`] - the ordered merge rules.
//! * [`BpeModel`] - the persisted model.
//! * [`io`] - model file io.

pub mod io;

mod bpe_model;
mod merge_rule;

#[doc(inline)]
pub use bpe_model::BpeModel;
#[doc(inline)]
pub use merge_rule::{MergeList, MergeRule};
