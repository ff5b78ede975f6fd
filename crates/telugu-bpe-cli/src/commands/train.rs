use std::io::{BufRead, BufReader};

use arrow::array::{Array, StringArray};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use telugu_bpe::{
    TBResult,
    TeluguTokenizer,
    training::{DEFAULT_VOCAB_SIZE, VocabLearnerOptions},
};

use crate::model_args::ModelArgs;

/// File formats for the train command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FileFormat {
    /// Simple text files; one sample per line.
    Text,

    /// Parquet files with a "text" column.
    Parquet,
}

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input files.
    #[arg(required = true)]
    files: Vec<String>,

    #[arg(long, default_value = "text")]
    input_format: FileFormat,

    /// Target vocab size.
    #[arg(long, default_value_t = DEFAULT_VOCAB_SIZE)]
    vocab_size: usize,

    /// Stop merging once the best pair occurs fewer times than this.
    #[arg(long, default_value_t = 1)]
    min_frequency: usize,

    #[command(flatten)]
    model: ModelArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let samples = self.read_samples()?;
        let tokenizer = self.train(&samples)?;
        self.model.save_tokenizer(&tokenizer)?;

        Ok(())
    }

    fn read_samples(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let mut samples: Vec<String> = Vec::new();

        log::info!("Reading shards:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            match self.input_format {
                FileFormat::Text => read_text_file(&mut samples, path)?,
                FileFormat::Parquet => read_parquet_file(&mut samples, path)?,
            }
        }
        log::info!("Read {} samples", samples.len());

        Ok(samples)
    }

    /// Train over `samples`; a blank corpus is rejected before anything is saved.
    fn train(
        &self,
        samples: &[String],
    ) -> TBResult<TeluguTokenizer> {
        let options = VocabLearnerOptions::new(self.vocab_size).with_min_frequency(self.min_frequency);

        log::info!("Training Tokenizer...");
        let tokenizer = TeluguTokenizer::train_samples(samples, options)?;

        let model = tokenizer.model();
        log::info!(
            "Vocabulary Size: {} (target {}); {} merges",
            model.vocab_len(),
            model.vocab_size(),
            model.merges().len()
        );

        let stats = tokenizer.compression_stats(&samples.join("\n"));
        log::info!("Compression: {stats}");

        Ok(tokenizer)
    }
}

fn read_text_file(
    samples: &mut Vec<String>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    for line in reader.lines() {
        samples.push(line?);
    }
    Ok(())
}

fn read_parquet_file(
    samples: &mut Vec<String>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    for batch in reader {
        let batch = batch?;

        let column = batch
            .column_by_name("text")
            .ok_or_else(|| format!("{path}: failed to find 'text' column in batch"))?;
        let texts = column
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| format!("{path}: 'text' column is not a string column"))?;

        samples.extend(texts.iter().flatten().map(str::to_string));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{ArrayRef, Int32Array},
        record_batch::RecordBatch,
    };
    use clap::Parser;
    use parquet::arrow::ArrowWriter;
    use telugu_bpe::TeluguBpeError;

    use super::*;
    use crate::{Args, commands::Commands};

    fn train_args(args: &[&str]) -> TrainArgs {
        let argv = ["telugu-bpe", "train"].into_iter().chain(args.iter().copied());
        match Args::try_parse_from(argv).unwrap().command {
            Commands::Train(cmd) => cmd,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    fn write_parquet(
        path: &std::path::Path,
        name: &str,
        column: ArrayRef,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let batch = RecordBatch::try_from_iter([(name, column)])?;
        let mut writer = ArrowWriter::try_new(std::fs::File::create(path)?, batch.schema(), None)?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }

    #[test]
    fn test_read_text_file() {
        tempdir::TempDir::new("train_test")
            .and_then(|dir| {
                let path = dir.path().join("corpus.txt");
                std::fs::write(&path, "అమ్మ అమ్మ\nనాన్న\n")?;

                let mut samples = Vec::new();
                read_text_file(&mut samples, path.to_str().unwrap()).unwrap();
                assert_eq!(samples, vec!["అమ్మ అమ్మ", "నాన్న"]);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_parquet_file() {
        tempdir::TempDir::new("train_test")
            .and_then(|dir| {
                let path = dir.path().join("corpus.parquet");
                let texts: ArrayRef =
                    Arc::new(StringArray::from(vec![Some("అమ్మ"), None, Some("నాన్న")]));
                write_parquet(&path, "text", texts).unwrap();

                let mut samples = Vec::new();
                read_parquet_file(&mut samples, path.to_str().unwrap()).unwrap();
                assert_eq!(samples, vec!["అమ్మ", "నాన్న"]);

                let bad = dir.path().join("bad.parquet");
                let numbers: ArrayRef = Arc::new(Int32Array::from(vec![1, 2]));
                write_parquet(&bad, "text", numbers).unwrap();
                assert!(read_parquet_file(&mut samples, bad.to_str().unwrap()).is_err());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_train_saves_model() {
        tempdir::TempDir::new("train_test")
            .and_then(|dir| {
                let corpus = dir.path().join("corpus.txt");
                let model = dir.path().join("out").join("model.json");
                std::fs::write(&corpus, "అమ్మ అమ్మ\nనాన్న\n")?;

                let cmd = train_args(&[
                    corpus.to_str().unwrap(),
                    "--vocab-size",
                    "8",
                    "--model",
                    model.to_str().unwrap(),
                ]);
                cmd.run().unwrap();

                let tokenizer = TeluguTokenizer::load(&model).unwrap();
                assert_eq!(tokenizer.model().vocab_size(), 8);
                assert_eq!(tokenizer.model().vocab_len(), 8);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_train_rejects_blank_corpus() {
        tempdir::TempDir::new("train_test")
            .and_then(|dir| {
                let corpus = dir.path().join("blank.txt");
                let model = dir.path().join("model.json");
                std::fs::write(&corpus, "\n   \n\t\n")?;
                std::fs::write(&model, "previous model")?;

                let cmd = train_args(&[
                    corpus.to_str().unwrap(),
                    "--model",
                    model.to_str().unwrap(),
                ]);
                let err = cmd.run().unwrap_err();
                assert!(matches!(
                    err.downcast_ref::<TeluguBpeError>(),
                    Some(TeluguBpeError::EmptyInput)
                ));
                assert_eq!(std::fs::read_to_string(&model)?, "previous model");

                let empty = dir.path().join("empty.txt");
                std::fs::write(&empty, "")?;
                let cmd = train_args(&[empty.to_str().unwrap(), "--model", model.to_str().unwrap()]);
                assert!(cmd.run().is_err());
                Ok(())
            })
            .unwrap();
    }
}
