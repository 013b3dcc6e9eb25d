//! Mean-based reduction of a duration sample.
//!
//! No warm-up exclusion or outlier handling: every iteration counts equally.

use std::fmt;

/// Per-iteration elapsed times in milliseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationSample {
    millis: Vec<f64>,
}

impl DurationSample {
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            millis: Vec::with_capacity(iterations),
        }
    }

    pub fn push(&mut self, millis: f64) {
        self.millis.push(millis);
    }

    pub fn len(&self) -> usize {
        self.millis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.millis.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.millis
    }
}

impl From<Vec<f64>> for DurationSample {
    fn from(millis: Vec<f64>) -> Self {
        Self { millis }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub name: String,
    pub iterations: usize,
    pub avg_ms: f64,
    pub total_ms: f64,
    pub total_s: f64,
    /// Iterations per second. `inf` when the sample summed to zero.
    pub throughput: f64,
}

impl BenchmarkReport {
    /// True when every measurement rounded to zero, leaving throughput unbounded.
    pub fn is_degenerate(&self) -> bool {
        self.total_s == 0.0
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: avg time for {} iterations: {} ms (total {} s, RPS: {})",
            self.name, self.iterations, self.avg_ms, self.total_s, self.throughput
        )
    }
}

/// Division by a zero total is left to IEEE semantics: a zero sum gives `inf`
/// throughput, an empty sample gives `NaN` for both average and throughput.
pub fn summarize(name: &str, sample: &DurationSample) -> BenchmarkReport {
    let iterations = sample.len();
    let total_ms: f64 = sample.as_slice().iter().sum();
    let total_s = total_ms / 1000.0;

    BenchmarkReport {
        name: name.to_string(),
        iterations,
        avg_ms: total_ms / iterations as f64,
        total_ms,
        total_s,
        throughput: iterations as f64 / total_s,
    }
}
