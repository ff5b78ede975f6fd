#![allow(missing_docs)]

use std::collections::BTreeSet;

use telugu_bpe::{
    TeluguBpeError,
    TeluguTokenizer,
    encoders::{MergeReplayEncoder, SymbolEncoder, encode},
    preprocess::preprocess,
    training::{VocabLearnerOptions, learn},
    types::Symbol,
    vocab::{BpeModel, MergeList, MergeRule},
};

const SAMPLE_CORPUS: &str = "
    నమస్కారం తెలుగు భాష చాలా అందమైన భాష
    తెలుగు భారతదేశంలోని ద్రావిడ భాషల్లో ఒకటి
    తెలుగు అక్షరమాల లో 56 అక్షరాలు ఉన్నాయి
";

fn alphabet(text: &str) -> BTreeSet<Symbol> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Symbol::from(c.to_string()))
        .collect()
}

#[test]
fn alphabet_sized_target_learns_nothing() {
    let text = preprocess("నమస్కారం");
    let chars = alphabet(&text);
    assert_eq!(chars.len(), 8);

    let model = learn(&text, chars.len());
    assert!(model.merges().is_empty());
    assert_eq!(model.vocab(), &chars);

    let tokens = encode(&text, model.merges());
    let expected: Vec<String> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect();
    assert_eq!(tokens, expected);
}

#[test]
fn one_merge_takes_a_repeated_pair() {
    let text = preprocess("అమ్మ అమ్మ నాన్న");
    let chars = alphabet(&text);
    assert_eq!(chars.len(), 5);

    let model = learn(&text, chars.len() + 1);
    assert_eq!(model.merges().as_slice(), &[MergeRule::new("అ", "మ")]);
    assert_eq!(model.vocab_len(), 6);

    assert_eq!(encode("అమ్మ", model.merges()), vec!["అమ", "్", "మ"]);
}

#[test]
fn sample_corpus_pipeline() {
    let tokenizer = TeluguTokenizer::train(SAMPLE_CORPUS, VocabLearnerOptions::default()).unwrap();
    let model = tokenizer.model();

    // The corpus runs out of pairs long before the default target.
    assert_eq!(model.vocab_size(), 5000);
    assert_eq!(alphabet(&preprocess(SAMPLE_CORPUS)).len(), 31);
    assert_eq!(model.merges().len(), 39);
    assert_eq!(model.vocab_len(), 31 + 39);

    let first: Vec<String> = model.merges().iter().take(3).map(MergeRule::key).collect();
    assert_eq!(first, vec!["ా ల", "ా ష", "ు గ"]);

    assert_eq!(
        tokenizer.encode("తెలుగు భాష"),
        vec!["త", "ెల", "ుగ", "ు", "భ", "ాష"]
    );
}

#[test]
fn model_round_trip_preserves_encoding() {
    let tokenizer = TeluguTokenizer::train(SAMPLE_CORPUS, VocabLearnerOptions::new(60)).unwrap();
    let samples = [
        SAMPLE_CORPUS,
        "తెలుగు భాష చాలా అందమైన భాష",
        "Hello, ప్రపంచం! 2024",
        "",
    ];

    tempdir::TempDir::new("pipeline_test")
        .and_then(|dir| {
            let path = dir.path().join("models").join("telugu_bpe_model.json");
            tokenizer.save(&path).expect("Failed to save model");

            let loaded = TeluguTokenizer::load(&path).expect("Failed to load model");
            assert_eq!(loaded.model(), tokenizer.model());
            for sample in samples {
                assert_eq!(loaded.encode(sample), tokenizer.encode(sample), "{sample:?}");
            }

            // Saving the reloaded model reproduces the file byte for byte.
            let copy = dir.path().join("copy.json");
            loaded.save(&copy).expect("Failed to save model copy");
            assert_eq!(std::fs::read(&path)?, std::fs::read(&copy)?);
            Ok(())
        })
        .unwrap();
}

#[test]
fn missing_model_and_empty_input() {
    tempdir::TempDir::new("pipeline_test")
        .and_then(|dir| {
            let path = dir.path().join("nope.json");
            match BpeModel::load(&path) {
                Err(TeluguBpeError::ModelNotFound { path: p }) => assert_eq!(p, path),
                other => panic!("unexpected: {other:?}"),
            }
            Ok(())
        })
        .unwrap();

    let model = learn(preprocess(SAMPLE_CORPUS), 50);
    assert!(encode("", model.merges()).is_empty());
    assert!(MergeReplayEncoder::new(model).encode("").is_empty());

    let tokenizer = TeluguTokenizer::from_model(BpeModel::default());
    assert!(matches!(tokenizer.report("  "), Err(TeluguBpeError::EmptyInput)));
}

#[test]
fn hand_written_model_file() {
    let json = r#"{
  "vocab_size": 8,
  "merges": {
    "్ మ": "్మ",
    "అ మ": "అమ",
    "అమ ్మ": "అమ్మ"
  },
  "vocab": ["అ", "మ", "్", "్మ", "అమ", "అమ్మ"]
}"#;

    tempdir::TempDir::new("pipeline_test")
        .and_then(|dir| {
            let path = dir.path().join("model.json");
            std::fs::write(&path, json)?;

            let tokenizer = TeluguTokenizer::load(&path).expect("Failed to load model");
            let merges: &MergeList = tokenizer.model().merges();
            assert_eq!(merges.as_slice()[0], MergeRule::new("్", "మ"));
            assert_eq!(tokenizer.encode("అమ్మ నాన్న"), vec![
                "అమ్మ", "న", "ా", "న", "్", "న"
            ]);
            Ok(())
        })
        .unwrap();
}
