use std::io::Write;

use telugu_bpe::preprocess::preprocess;

use crate::input_output::LineArgs;

/// Args for the preprocess command.
#[derive(clap::Args, Debug)]
pub struct PreprocessArgs {
    #[command(flatten)]
    lines: LineArgs,
}

impl PreprocessArgs {
    /// Run the preprocess command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.lines.transform(preprocess_line)?;
        Ok(())
    }
}

fn preprocess_line(
    line: &str,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(writer, "{}", preprocess(line))?;
    Ok(())
}
