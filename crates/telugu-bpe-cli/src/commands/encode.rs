use std::io::Write;

use telugu_bpe::{
    TeluguBpeError,
    TeluguTokenizer,
    training::{DEFAULT_VOCAB_SIZE, VocabLearnerOptions},
};

use crate::{input_output::LineArgs, model_args::ModelArgs};

/// Corpus for `--train-missing`.
pub const SAMPLE_CORPUS: &str = "
    నమస్కారం తెలుగు భాష చాలా అందమైన భాష
    తెలుగు భారతదేశంలోని ద్రావిడ భాషల్లో ఒకటి
    తెలుగు అక్షరమాల లో 56 అక్షరాలు ఉన్నాయి
";

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    model: ModelArgs,

    #[command(flatten)]
    lines: LineArgs,

    /// Write one JSON report per line.
    #[arg(long)]
    json: bool,

    /// Train and save a model from a built-in sample corpus
    /// when the model file does not exist.
    #[arg(long)]
    train_missing: bool,

    /// Target vocab size for `--train-missing`.
    #[arg(long, default_value_t = DEFAULT_VOCAB_SIZE)]
    vocab_size: usize,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.open_tokenizer()?;

        if self.json {
            self.lines
                .transform(|line, writer| encode_line_json(&tokenizer, line, writer))?;
        } else {
            self.lines
                .transform(|line, writer| encode_line(&tokenizer, line, writer))?;
        }

        Ok(())
    }

    fn open_tokenizer(&self) -> Result<TeluguTokenizer, Box<dyn std::error::Error>> {
        match self.model.load_tokenizer() {
            Err(TeluguBpeError::ModelNotFound { path }) if self.train_missing => {
                log::warn!("Model not found at {}; training from sample text", path.display());
                let tokenizer =
                    TeluguTokenizer::train(SAMPLE_CORPUS, VocabLearnerOptions::new(self.vocab_size))?;
                self.model.save_tokenizer(&tokenizer)?;
                Ok(tokenizer)
            }
            result => Ok(result?),
        }
    }
}

/// Write the space-joined tokens of `line`; blank lines write nothing.
fn encode_line(
    tokenizer: &TeluguTokenizer,
    line: &str,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if line.trim().is_empty() {
        return Ok(());
    }

    let tokens = tokenizer.encode(line);
    writeln!(writer, "{}", tokens.join(" "))?;
    Ok(())
}

/// Write the JSON report of `line`, or an error object for blank lines.
fn encode_line_json(
    tokenizer: &TeluguTokenizer,
    line: &str,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = match tokenizer.report(line) {
        Ok(report) => serde_json::to_value(&report)?,
        Err(err @ TeluguBpeError::EmptyInput) => serde_json::json!({ "error": err.to_string() }),
        Err(err) => return Err(err.into()),
    };
    serde_json::to_writer(&mut *writer, &value)?;
    writeln!(writer)?;
    Ok(())
}
