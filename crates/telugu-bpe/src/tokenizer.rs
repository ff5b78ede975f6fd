//! # Telugu Tokenizer

use std::{path::Path, sync::Arc};

use crate::{
    encoders::{MergeReplayEncoder, SymbolEncoder},
    errors::{TBResult, TeluguBpeError},
    preprocess::preprocess,
    report::{CompressionStats, TokenizationReport},
    training::VocabLearnerOptions,
    types::Symbol,
    vocab::BpeModel,
};

/// Preprocessing plus merge replay over one shared, immutable [`BpeModel`].
///
/// Cloning is cheap; clones share the model.
#[derive(Debug, Clone)]
pub struct TeluguTokenizer {
    encoder: MergeReplayEncoder,
}

impl From<BpeModel> for TeluguTokenizer {
    fn from(model: BpeModel) -> Self {
        Self::from_model(model)
    }
}

impl TeluguTokenizer {
    /// Wrap a model.
    pub fn from_model<M: Into<Arc<BpeModel>>>(model: M) -> Self {
        Self {
            encoder: MergeReplayEncoder::new(model),
        }
    }

    /// Preprocess raw `text` and learn a model from it.
    ///
    /// ## Errors
    /// * [`TeluguBpeError::EmptyInput`] - when `text` is blank.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(text)))]
    pub fn train<S: AsRef<str>>(
        text: S,
        options: VocabLearnerOptions,
    ) -> TBResult<Self> {
        Self::train_samples([text], options)
    }

    /// Preprocess each raw sample and learn a model from all of them.
    ///
    /// ## Errors
    /// * [`TeluguBpeError::EmptyInput`] - when every sample is blank, or there are none.
    pub fn train_samples<I>(
        samples: I,
        options: VocabLearnerOptions,
    ) -> TBResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut blank = true;
        let mut learner = options.init();
        learner.update_from_samples(samples.into_iter().map(|sample| {
            blank &= sample.as_ref().trim().is_empty();
            preprocess(sample)
        }));

        if blank {
            return Err(TeluguBpeError::EmptyInput);
        }
        Ok(Self::from_model(learner.learn()))
    }

    /// Load a model file.
    pub fn load<P: AsRef<Path>>(path: P) -> TBResult<Self> {
        Ok(Self::from_model(BpeModel::load(path)?))
    }

    /// Save the model file.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> TBResult<()> {
        self.model().save(path)
    }

    /// The model.
    pub fn model(&self) -> &BpeModel {
        self.encoder.model()
    }

    /// The shared model.
    pub fn model_arc(&self) -> &Arc<BpeModel> {
        self.encoder.model_arc()
    }

    /// The encoder.
    pub fn encoder(&self) -> &MergeReplayEncoder {
        &self.encoder
    }

    /// Normalize raw text.
    pub fn preprocess<S: AsRef<str>>(
        &self,
        text: S,
    ) -> String {
        preprocess(text)
    }

    /// Preprocess and encode raw text.
    pub fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<Symbol> {
        self.encoder.encode(preprocess(text))
    }

    /// Preprocess and encode a batch of raw texts.
    pub fn encode_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<Symbol>>
    where
        S: AsRef<str> + Sync,
    {
        let preprocessed: Vec<String> = batch.iter().map(preprocess).collect();
        self.encoder.encode_batch(&preprocessed)
    }

    /// Tokenize one user-supplied text; see [`TokenizationReport::build`].
    pub fn report(
        &self,
        text: &str,
    ) -> TBResult<TokenizationReport> {
        TokenizationReport::build(&self.encoder, text)
    }

    /// Measure this tokenizer over a raw corpus.
    pub fn compression_stats(
        &self,
        corpus: &str,
    ) -> CompressionStats {
        CompressionStats::measure(&self.encoder, corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "అమ్మ అమ్మ నాన్న తెలుగు భాష";

    #[test]
    fn test_train_and_encode() {
        let tokenizer = TeluguTokenizer::train(CORPUS, VocabLearnerOptions::new(30)).unwrap();
        assert_eq!(tokenizer.model().vocab_size(), 30);
        assert_eq!(tokenizer.encode("hello అమ్మ"), vec!["అమ్మ"]);
        assert!(tokenizer.encode("").is_empty());

        let batch = tokenizer.encode_batch(&["అమ్మ", "hello"]);
        assert_eq!(batch, vec![vec![Symbol::from("అమ్మ")], vec![]]);
    }

    #[test]
    fn test_train_samples() {
        let a = TeluguTokenizer::train_samples(
            ["అమ్మ అమ్మ", "నాన్న తెలుగు భాష"],
            VocabLearnerOptions::new(30),
        )
        .unwrap();
        let b = TeluguTokenizer::train(
            "అమ్మ అమ్మ\nనాన్న తెలుగు భాష",
            VocabLearnerOptions::new(30),
        )
        .unwrap();
        assert_eq!(a.model(), b.model());
    }

    #[test]
    fn test_train_rejects_blank() {
        for text in ["", "  ", "\n\t\n"] {
            assert!(matches!(
                TeluguTokenizer::train(text, VocabLearnerOptions::new(30)),
                Err(TeluguBpeError::EmptyInput)
            ));
        }
        assert!(matches!(
            TeluguTokenizer::train_samples(["", " "], VocabLearnerOptions::new(30)),
            Err(TeluguBpeError::EmptyInput)
        ));
        assert!(matches!(
            TeluguTokenizer::train_samples(Vec::<String>::new(), VocabLearnerOptions::new(30)),
            Err(TeluguBpeError::EmptyInput)
        ));

        // One non-blank sample is enough.
        let tokenizer =
            TeluguTokenizer::train_samples(["", "అమ్మ"], VocabLearnerOptions::new(30)).unwrap();
        assert_eq!(tokenizer.encode("అమ్మ"), vec!["అమ్మ"]);
    }

    #[test]
    fn test_clones_share_model() {
        let tokenizer: TeluguTokenizer = BpeModel::default().into();
        let clone = tokenizer.clone();
        assert!(Arc::ptr_eq(tokenizer.model_arc(), clone.model_arc()));
    }

    #[test]
    fn test_save_load() {
        let tokenizer = TeluguTokenizer::train(CORPUS, VocabLearnerOptions::new(25)).unwrap();

        tempdir::TempDir::new("tokenizer_test")
            .and_then(|dir| {
                let path = dir.path().join("model.json");
                tokenizer.save(&path).expect("Failed to save model");

                let loaded = TeluguTokenizer::load(&path).expect("Failed to load model");
                assert_eq!(loaded.model(), tokenizer.model());
                assert_eq!(loaded.encode(CORPUS), tokenizer.encode(CORPUS));

                assert!(matches!(
                    TeluguTokenizer::load(dir.path().join("missing.json")),
                    Err(TeluguBpeError::ModelNotFound { .. })
                ));
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_report() {
        let tokenizer = TeluguTokenizer::train(CORPUS, VocabLearnerOptions::new(30)).unwrap();
        let report = tokenizer.report("అమ్మ").unwrap();
        assert_eq!(report.tokens, tokenizer.encode("అమ్మ"));
        assert!(matches!(tokenizer.report(" "), Err(TeluguBpeError::EmptyInput)));

        let stats = tokenizer.compression_stats(CORPUS);
        assert_eq!(stats.words, 10);
        assert!(stats.tokens < stats.symbol_chars);
    }
}
