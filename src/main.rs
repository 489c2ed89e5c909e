#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::io;
use std::process::exit;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, error, info};

use largest_region::cli::Cli;
use largest_region::{largest_region_size, Prompter};

#[inline(always)]
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let end = Instant::now();
    (result, end - start)
}

fn setup_logging(cli: &Cli) -> anyhow::Result<LoggerHandle> {
    Logger::try_with_env_or_str(cli.log_spec())
        .context("invalid log specification")?
        .log_to_stderr()
        .start()
        .context("logger initialization failed")
}

fn run(cli: &Cli) -> anyhow::Result<usize> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr())
        .with_max_attempts(cli.max_attempts)
        .with_prompts(cli.prompt);

    let matrix = prompter.read_matrix().context("failed to read matrix")?;
    debug!("Matrix:\n{}", matrix);

    let (solution, duration) = timed(|| largest_region_size(&matrix));
    info!("Algorithm duration: {:?}", duration);

    Ok(solution?)
}

fn main() {
    let cli = Cli::parse();

    let _logger = setup_logging(&cli).unwrap_or_else(|err| {
        eprintln!("Error: {:#}", err);
        exit(1);
    });

    let (result, total_duration) = timed(|| run(&cli));
    info!("Total duration: {:?}", total_duration);

    match result {
        Ok(solution) => println!("{}", solution),
        Err(err) => {
            error!("{:#}", err);
            exit(1);
        }
    }
}
