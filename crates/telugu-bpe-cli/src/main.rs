mod commands;
mod input_output;
mod logging;
mod model_args;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// telugu-bpe: train, inspect and run Telugu subword tokenizers.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub logging: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.init(args.command.default_log_level())?;

    args.command.run()
}
