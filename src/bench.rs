//! Runs every algorithm over the input file, one after another.

use crate::algorithm::{AlgorithmId, DigestFn, HashProvider, XXHASH_NAME, XXHASH_SEED};
use crate::console::Console;
use crate::input::InputBuffer;
use crate::progress::ProgressMode;
use crate::runner::IterationRunner;
use crate::stats::{summarize, BenchmarkReport};
use crate::utils::format_bytes;
use anyhow::Result;
use std::path::Path;

/// Result of one algorithm's pass.
#[derive(Debug, Clone)]
pub struct BenchmarkOutcome {
    pub name: String,
    /// Hex digest of the untimed sample computation.
    pub digest: String,
    pub report: BenchmarkReport,
}

pub struct Benchmark<'a> {
    provider: HashProvider,
    algorithms: Vec<AlgorithmId>,
    console: &'a dyn Console,
    iterations: usize,
    progress: ProgressMode,
}

impl<'a> Benchmark<'a> {
    pub fn new(console: &'a dyn Console, iterations: usize) -> Self {
        Self {
            provider: HashProvider::new(),
            algorithms: AlgorithmId::ALL.to_vec(),
            console,
            iterations,
            progress: ProgressMode::Terminal,
        }
    }

    /// Restricts the run to `algorithms`. Declaration order is kept regardless
    /// of the order given.
    pub fn with_algorithms(mut self, algorithms: &[AlgorithmId]) -> Self {
        if !algorithms.is_empty() {
            self.algorithms = AlgorithmId::ALL
                .into_iter()
                .filter(|algo| algorithms.contains(algo))
                .collect();
        }
        self
    }

    pub fn with_progress(mut self, progress: ProgressMode) -> Self {
        self.progress = progress;
        self
    }

    /// Loads `input_path` and benchmarks xxHash32 followed by every selected
    /// algorithm.
    ///
    /// A missing or unreadable input is reported on the console and yields no
    /// outcomes. Digest failures are returned as errors.
    pub fn run_all<P: AsRef<Path>>(&self, input_path: P) -> Result<Vec<BenchmarkOutcome>> {
        self.console.log("Loading input file...");
        let input = match InputBuffer::load(input_path) {
            Ok(input) => input,
            Err(e) => {
                self.console.error(&format!("{:#}", e));
                return Ok(Vec::new());
            }
        };

        self.console.success("Input file loaded");
        self.console.info(&format!(
            "Length: {} ({})",
            input.len(),
            format_bytes(input.len() as u64)
        ));
        if input.is_empty() {
            self.console.warning("Input file is empty");
        }

        let mut outcomes = Vec::with_capacity(self.algorithms.len() + 1);

        outcomes.push(self.run_one(XXHASH_NAME, &input, || {
            self.provider.xxhash32_function(XXHASH_SEED)
        })?);

        for &algo in &self.algorithms {
            outcomes.push(self.run_one(algo.name(), &input, || {
                self.provider.digest_function(algo)
            })?);
        }

        Ok(outcomes)
    }

    fn run_one<'p, F>(
        &self,
        name: &str,
        input: &InputBuffer,
        acquire: F,
    ) -> Result<BenchmarkOutcome>
    where
        F: Fn() -> DigestFn<'p>,
    {
        let digest = hex::encode(acquire()(input.as_bytes())?);
        self.console.success(&format!("{}: {}", name, digest));

        self.console
            .log(&format!("Computing hash: {} (x{})", name, self.iterations));
        let runner = IterationRunner::new(self.console, self.iterations);
        let mut progress = self.progress.sink()?;
        let sample = runner.run(acquire, input, progress.as_mut())?;

        let report = summarize(name, &sample);
        self.console.info(&report.to_string());
        if report.is_degenerate() {
            self.console.warning(&format!(
                "{}: measured time summed to zero, RPS is unbounded",
                name
            ));
        }

        Ok(BenchmarkOutcome {
            name: name.to_string(),
            digest,
            report,
        })
    }
}
