use crate::algorithm::DigestFn;
use crate::console::Console;
use crate::input::InputBuffer;
use crate::progress::ProgressSink;
use crate::stats::DurationSample;
use crate::timer::timed_call;
use anyhow::Result;

/// Times a fixed number of digest computations over one input.
pub struct IterationRunner<'a> {
    console: &'a dyn Console,
    iterations: usize,
}

impl<'a> IterationRunner<'a> {
    pub fn new(console: &'a dyn Console, iterations: usize) -> Self {
        Self {
            console,
            iterations,
        }
    }

    /// `acquire` is called once per iteration, so every computation gets its
    /// own digest function and hasher.
    ///
    /// The first failing computation aborts the loop; no partial sample is
    /// returned.
    pub fn run<'p, F>(
        &self,
        acquire: F,
        input: &InputBuffer,
        progress: &mut dyn ProgressSink,
    ) -> Result<DurationSample>
    where
        F: Fn() -> DigestFn<'p>,
    {
        let mut sample = DurationSample::with_capacity(self.iterations);

        for i in 1..=self.iterations {
            let digest = acquire();
            let (_, elapsed) = timed_call(digest, input.as_bytes())?;
            sample.push(elapsed.as_secs_f64() * 1000.0);
            progress.report(i as f64 / self.iterations as f64);
        }

        progress.clear();
        self.console.success("Done.");
        Ok(sample)
    }
}
