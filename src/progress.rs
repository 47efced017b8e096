//! Progress bar display for packaging stages

use indicatif::{ProgressBar, ProgressStyle};

/// One bar advancing once per packaging stage
///
/// Drawn to stderr and hidden automatically when stderr is not a terminal.
pub struct StageProgress {
    bar: ProgressBar,
}

impl StageProgress {
    /// Create a progress display for `total_stages` stages
    pub fn new(total_stages: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_stages);
        bar.set_style(style);
        Self { bar }
    }

    /// A display that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the stage currently running
    pub fn start(&self, stage: &str) {
        self.bar.set_message(stage.to_string());
    }

    /// Mark the current stage complete
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error, leaving the last stage visible
    pub fn abandon(&self) {
        self.bar.abandon();
    }

    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
