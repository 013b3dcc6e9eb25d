//! Progress feedback for the timed loops.
//!
//! The runner only sees [`ProgressSink`]; the indicatif bar is one adapter.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Ticks on the terminal bar. Fractions are scaled to this range.
const BAR_RESOLUTION: u64 = 1000;

const BAR_TEMPLATE: &str = "[{bar:40.cyan/blue}] {percent:>3}%";

pub trait ProgressSink {
    /// Reports completion in `[0, 1]`.
    fn report(&mut self, fraction: f64);

    /// Removes the indicator once its loop is over.
    fn clear(&mut self);
}

pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new() -> Result<Self> {
        let bar = ProgressBar::new(BAR_RESOLUTION);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)?
                .progress_chars("=>-"),
        );
        Ok(Self { bar })
    }
}

impl ProgressSink for TerminalProgress {
    fn report(&mut self, fraction: f64) {
        let position = (fraction.clamp(0.0, 1.0) * BAR_RESOLUTION as f64).round() as u64;
        if position != self.bar.position() {
            self.bar.set_position(position);
        }
    }

    fn clear(&mut self) {
        self.bar.finish_and_clear();
    }
}

pub struct HiddenProgress;

impl ProgressSink for HiddenProgress {
    fn report(&mut self, _fraction: f64) {}
    fn clear(&mut self) {}
}

/// Remembers every reported fraction.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub fractions: Vec<f64>,
    pub cleared: bool,
}

impl ProgressSink for RecordingProgress {
    fn report(&mut self, fraction: f64) {
        self.fractions.push(fraction);
    }

    fn clear(&mut self) {
        self.cleared = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Terminal,
    Hidden,
}

impl ProgressMode {
    pub fn sink(&self) -> Result<Box<dyn ProgressSink>> {
        let sink: Box<dyn ProgressSink> = match self {
            ProgressMode::Terminal => Box::new(TerminalProgress::new()?),
            ProgressMode::Hidden => Box::new(HiddenProgress),
        };
        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_progress_scales_fraction() {
        let mut progress = TerminalProgress {
            bar: ProgressBar::hidden(),
        };
        progress.bar.set_length(BAR_RESOLUTION);

        progress.report(0.25);
        assert_eq!(progress.bar.position(), 250);

        progress.report(1.0);
        assert_eq!(progress.bar.position(), BAR_RESOLUTION);

        progress.clear();
        assert!(progress.bar.is_finished());
    }

    #[test]
    fn test_sinks_build() -> Result<()> {
        ProgressMode::Terminal.sink()?.clear();
        ProgressMode::Hidden.sink()?.clear();
        Ok(())
    }

    #[test]
    fn test_bad_template_is_an_error() {
        assert!(ProgressStyle::default_bar().template(BAR_TEMPLATE).is_ok());
        assert!(ProgressStyle::default_bar().template("{bar:40.cyan").is_err());
    }

    #[test]
    fn test_recording_progress() {
        let mut progress = RecordingProgress::default();
        progress.report(0.5);
        progress.report(1.0);
        progress.clear();
        assert_eq!(progress.fractions, vec![0.5, 1.0]);
        assert!(progress.cleared);
    }
}
