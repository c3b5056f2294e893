use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Thin wrapper over an indicatif bar that can be switched off entirely.
/// Safe to share across rayon workers.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Bar counting a known number of steps (one per artifact).
    pub fn new(total: u64, message: &str, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} {msg:<28} [{bar:30.cyan/blue}] {pos}/{len} [{elapsed_precise}]",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn new_spinner(message: &str, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn silent() -> Self {
        Self { progress_bar: None }
    }

    /// Record one finished step and show what it was.
    pub fn step_done(&self, step: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(step.to_string());
            pb.inc(1);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.abandon();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_is_inert() {
        let progress = ProgressReporter::new(3, "Rendering", true);
        progress.step_done("fig_1_nulls.png");
        progress.set_message("still quiet");
        progress.finish_with_message("done");
        assert!(progress.progress_bar.is_none());
    }

    #[test]
    fn test_hidden_bar_counts_steps() {
        let progress = ProgressReporter {
            progress_bar: Some(ProgressBar::hidden()),
        };
        if let Some(ref pb) = progress.progress_bar {
            pb.set_length(2);
        }
        progress.step_done("tab_1.csv");
        progress.step_done("fig_1_nulls.png");

        let position = progress.progress_bar.as_ref().map(|pb| pb.position());
        assert_eq!(position, Some(2));
    }
}
