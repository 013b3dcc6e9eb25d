pub mod algorithm;
pub mod bench;
pub mod console;
pub mod input;
pub mod progress;
pub mod runner;
pub mod stats;
pub mod timer;
pub mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use algorithm::AlgorithmId;
use bench::{Benchmark, BenchmarkOutcome};
use console::{Console, Terminal};
use progress::ProgressMode;
use utils::Logger;

pub const DEFAULT_INPUT_PATH: &str = "./input.txt";
pub const DEFAULT_ITERATIONS: usize = 100_000;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File whose contents are hashed
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Timed iterations per algorithm
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Only benchmark these algorithms (repeatable). xxHash always runs.
    #[arg(long = "algorithm", value_enum)]
    pub algorithms: Vec<AlgorithmId>,

    /// Also append every console line to this file
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn run(args: Args) -> Result<Vec<BenchmarkOutcome>> {
    let terminal = Terminal::new(args.log.as_ref().map(Logger::new));
    terminal.log("hashbench");

    let progress = if args.no_progress {
        ProgressMode::Hidden
    } else {
        ProgressMode::Terminal
    };

    Benchmark::new(&terminal, args.iterations)
        .with_algorithms(&args.algorithms)
        .with_progress(progress)
        .run_all(&args.input)
}
