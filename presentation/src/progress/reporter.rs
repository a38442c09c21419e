//! Spinner shown while a completion request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner displayed while the loop blocks on the completion call
pub struct RequestSpinner {
    bar: ProgressBar,
}

impl RequestSpinner {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message("Waiting for reply...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Remove the spinner from the terminal.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
