//! Progress bar bridging the core observer trait to indicatif.

use indicatif::{ProgressBar, ProgressStyle};

use cpubench_core::observer::{ProgressObserver, ProgressUpdate};

/// Observer that renders progress updates as a terminal progress bar.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// Create a new progress bar observer.
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        let template = "{bar:40.cyan/blue} {percent:>3}% (eta {eta})";
        bar.set_style(
            ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    /// Clear the bar, e.g. when the run ends early with an error.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressBarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressBarObserver {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            self.bar.finish_and_clear();
            return;
        }
        self.bar
            .set_position((update.progress.clamp(0.0, 1.0) * 100.0) as u64);
    }
}
