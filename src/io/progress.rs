//! Progress display for sequential pattern generation
//!
//! Patterns run one after another, so a single step bar is reused for each
//! pattern. Runs of more than one pattern add an overall bar above it.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static OVERALL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Collapse throughput as shown next to the step bar
///
/// Reads `"-"` until the first step has measurable elapsed time.
pub fn step_rate_message(steps: usize, elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    if steps == 0 || seconds <= 0.0 {
        return "- steps/s".to_string();
    }
    let rate = steps as f64 / seconds;
    format!("{rate:.0} steps/s")
}

/// Step and pattern progress for one invocation
pub struct ProgressManager {
    multi_progress: MultiProgress,
    overall_bar: Option<ProgressBar>,
    step_bar: Option<ProgressBar>,
    pattern_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            overall_bar: None,
            step_bar: None,
            pattern_count: 0,
        }
    }

    /// Create the bars for a run of `pattern_count` patterns
    pub fn initialize(&mut self, pattern_count: usize) {
        self.pattern_count = pattern_count;
        if pattern_count == 0 {
            return;
        }

        if pattern_count > 1 {
            let overall = ProgressBar::new(pattern_count as u64);
            overall.set_style(OVERALL_STYLE.clone());
            self.overall_bar = Some(self.multi_progress.add(overall));
        }

        let step_bar = ProgressBar::new(0);
        step_bar.set_style(STEP_STYLE.clone());
        self.step_bar = Some(self.multi_progress.add(step_bar));
    }

    /// Point the step bar at pattern `index` with `steps` collapse steps
    pub fn start_pattern(&self, index: usize, steps: usize) {
        if let Some(ref bar) = self.step_bar {
            bar.reset();
            bar.set_length(steps as u64);
            bar.set_prefix(format!("pattern {}/{}", index + 1, self.pattern_count));
            bar.set_message(step_rate_message(0, Duration::ZERO));
        }
    }

    /// Report that `step` collapse steps of the current pattern are done
    pub fn update_step(&self, step: usize, elapsed: Duration) {
        if let Some(ref bar) = self.step_bar {
            bar.set_position(step as u64);
            bar.set_message(step_rate_message(step, elapsed));
        }
    }

    /// Mark the current pattern complete after `elapsed`
    pub fn complete_pattern(&self, elapsed: Duration) {
        if let Some(ref bar) = self.step_bar {
            if let Some(length) = bar.length() {
                bar.set_position(length);
            }
            bar.set_message(format!("done in {} ms", elapsed.as_millis()));
        }
        if let Some(ref overall) = self.overall_bar {
            overall.inc(1);
        }
    }

    /// Remove all bars so the rendered patterns print on a clean terminal
    pub fn finish(&self) {
        if let Some(ref overall) = self.overall_bar {
            overall.finish_with_message("All patterns generated");
        }
        if let Some(ref bar) = self.step_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
