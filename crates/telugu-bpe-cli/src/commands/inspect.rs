use std::io::Write;

use crate::model_args::ModelArgs;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    model: ModelArgs,

    /// Number of leading merge rules to list.
    #[arg(long, default_value_t = 20)]
    merges: usize,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.model.load_tokenizer()?;
        let model = tokenizer.model();

        let mut writer = std::io::stdout().lock();
        writeln!(writer, "model: {}", self.model.model.display())?;
        writeln!(writer, "target vocab size: {}", model.vocab_size())?;
        writeln!(writer, "vocab size: {}", model.vocab_len())?;
        writeln!(writer, "alphabet size: {}", model.alphabet().count())?;
        writeln!(writer, "merges: {}", model.merges().len())?;

        for (idx, rule) in model.merges().iter().take(self.merges).enumerate() {
            writeln!(writer, "{idx:>6}: {rule}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
