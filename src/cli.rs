use crate::prompt::DEFAULT_MAX_ATTEMPTS;

/// Print the size of the largest 8-connected region of 1s in a binary matrix.
///
/// Reads the row count, the column count, and then each row of
/// whitespace-separated 0/1 values from stdin.
#[derive(clap::Parser, Debug)]
#[command(name = "largest-region", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Invalid lines accepted for a single value before giving up (0 for no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Show input prompts on stderr
    #[arg(long)]
    pub prompt: bool,
}

impl Cli {
    /// Log spec used when `RUST_LOG` isn't set.
    pub fn log_spec(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
