use std::{
    error::Error,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// The path naming stdin or stdout.
const STDIO: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Line-at-a-time text streams.
#[derive(clap::Args, Debug)]
pub struct LineArgs {
    /// Text to read, one sample per line; "-" reads stdin.
    #[arg(long, default_value = STDIO)]
    input: PathBuf,

    /// Where to write one result per input line; "-" writes stdout.
    #[arg(long, default_value = STDIO)]
    output: PathBuf,
}

impl LineArgs {
    /// Feed every input line through `handle`, which writes its result.
    ///
    /// ## Returns
    /// The number of lines read.
    pub fn transform<F>(
        &self,
        handle: F,
    ) -> Result<usize, Box<dyn Error>>
    where
        F: FnMut(&str, &mut dyn Write) -> Result<(), Box<dyn Error>>,
    {
        let mut reader: Box<dyn BufRead> = if is_stdio(&self.input) {
            Box::new(std::io::stdin().lock())
        } else {
            Box::new(BufReader::new(File::open(&self.input)?))
        };
        let mut writer: Box<dyn Write> = if is_stdio(&self.output) {
            Box::new(BufWriter::new(std::io::stdout().lock()))
        } else {
            Box::new(BufWriter::new(File::create(&self.output)?))
        };

        let lines = transform_lines(&mut reader, &mut writer, handle)?;
        writer.flush()?;

        log::debug!("Processed {lines} lines");
        Ok(lines)
    }
}

/// Feed every line of `reader` through `handle`.
pub fn transform_lines<F>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    mut handle: F,
) -> Result<usize, Box<dyn Error>>
where
    F: FnMut(&str, &mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    let mut lines = 0;
    for line in reader.lines() {
        handle(&line?, &mut *writer)?;
        lines += 1;
    }
    Ok(lines)
}
