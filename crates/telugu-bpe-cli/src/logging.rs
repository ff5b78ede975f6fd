use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Levels reachable with `-v`, quietest first.
const LEVELS: [LevelFilter; 5] = [
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Logging flags, accepted before or after the subcommand.
///
/// Only records from this tool and the `telugu_bpe` library reach stderr.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log more than the command's default; repeatable (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long, global = true)]
    timestamps: bool,
}

impl LogArgs {
    /// The effective level, starting from a command's `default`.
    pub fn level(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        let start = LEVELS.iter().position(|l| *l == default).unwrap_or(0);
        let idx = (start + self.verbose as usize).min(LEVELS.len() - 1);
        LEVELS[idx]
    }

    /// Install the stderr logger.
    pub fn init(
        &self,
        default: LevelFilter,
    ) -> Result<(), log::SetLoggerError> {
        let level = self.level(default);
        stderrlog::new()
            .module("telugu_bpe")
            .quiet(level == LevelFilter::Off)
            .verbosity(level_num(level))
            .timestamp(if self.timestamps {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
    }
}

fn level_num(level: LevelFilter) -> LogLevelNum {
    match level {
        LevelFilter::Off => LogLevelNum::Off,
        LevelFilter::Error => LogLevelNum::Error,
        LevelFilter::Warn => LogLevelNum::Warn,
        LevelFilter::Info => LogLevelNum::Info,
        LevelFilter::Debug => LogLevelNum::Debug,
        LevelFilter::Trace => LogLevelNum::Trace,
    }
}
