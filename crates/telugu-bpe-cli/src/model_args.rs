use std::path::PathBuf;

use telugu_bpe::{TBResult, TeluguTokenizer};

/// The default model file name.
pub const DEFAULT_MODEL_PATH: &str = "telugu_bpe_model.json";

/// Model file arg group.
#[derive(clap::Args, Debug)]
pub struct ModelArgs {
    /// Model file.
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
}

impl ModelArgs {
    /// Load the tokenizer.
    pub fn load_tokenizer(&self) -> TBResult<TeluguTokenizer> {
        log::info!("Loading model: {}", self.model.display());
        let tokenizer = TeluguTokenizer::load(&self.model)?;
        log::info!(
            "Loaded {} merges; vocabulary size {}",
            tokenizer.model().merges().len(),
            tokenizer.model().vocab_len()
        );
        Ok(tokenizer)
    }

    /// Save a tokenizer's model.
    pub fn save_tokenizer(
        &self,
        tokenizer: &TeluguTokenizer,
    ) -> TBResult<()> {
        log::info!("Saving model: {}", self.model.display());
        tokenizer.save(&self.model)
    }
}
