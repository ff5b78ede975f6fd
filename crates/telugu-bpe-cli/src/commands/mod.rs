use log::LevelFilter;

mod encode;
mod inspect;
mod preprocess;
mod train;

/// Subcommands for telugu-bpe
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a new model from corpus files.
    Train(train::TrainArgs),

    /// Tokenize text, one line at a time.
    Encode(encode::EncodeArgs),

    /// Normalize text, one line at a time.
    Preprocess(preprocess::PreprocessArgs),

    /// Describe a model file.
    Inspect(inspect::InspectArgs),
}

impl Commands {
    /// The log level used without `-v` or `-q`.
    ///
    /// Training reports progress; the line filters only warn.
    pub fn default_log_level(&self) -> LevelFilter {
        match self {
            Commands::Train(_) => LevelFilter::Info,
            _ => LevelFilter::Warn,
        }
    }

    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Preprocess(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
