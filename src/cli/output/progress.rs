//! Spinner utilities using indicatif for terminal output
//!
//! A spinner covers the generation wait, and [`SpinnerReveal`] drives the
//! roulette animation by flashing each cosmetic draw on the same line.

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::domain::ports::RevealSink;

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const ROULETTE_TEMPLATE: &str = "{prefix:.bold.dim} {spinner:.yellow} {msg}";

const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const ROULETTE_CHARS: &str = "◐◓◑◒";

/// Create a spinner for indeterminate operations
///
/// # Example
/// ```
/// use menu_roulette::cli::output::progress::create_spinner;
///
/// let spinner = create_spinner();
/// spinner.set_message("Loading...");
/// spinner.finish_with_message("Done");
/// ```
pub fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(SPINNER_CHARS),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Create a spinner with a custom message
pub fn create_spinner_with_message(message: impl Into<String>) -> ProgressBar {
    let spinner = create_spinner();
    spinner.set_message(message.into());
    spinner
}

/// Extension trait for ProgressBar to add common utility methods
pub trait ProgressBarExt {
    /// Finish with a success message (green checkmark)
    fn finish_success(&self, message: impl Into<String>);

    /// Finish with an error message (red X)
    fn finish_error(&self, message: impl Into<String>);

    /// Finish with a warning message (yellow !)
    fn finish_warning(&self, message: impl Into<String>);
}

impl ProgressBarExt for ProgressBar {
    fn finish_success(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", style("✓").green().bold(), message.into()));
    }

    fn finish_error(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", style("✗").red().bold(), message.into()));
    }

    fn finish_warning(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", style("!").yellow().bold(), message.into()));
    }
}

/// Roulette animation on a single terminal line
pub struct SpinnerReveal {
    bar: ProgressBar,
}

impl SpinnerReveal {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// Draws nowhere; for tests and non-interactive output.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(
            ProgressStyle::default_spinner()
                .template(ROULETTE_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars(ROULETTE_CHARS),
        );
        bar.set_prefix("🎰");
        Self { bar }
    }

    /// Clear the animation line once the winner is known.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Most recently flashed name
    pub fn current(&self) -> String {
        self.bar.message()
    }
}

impl Default for SpinnerReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealSink for SpinnerReveal {
    fn transient(&mut self, step: usize, total: usize, name: &str) {
        self.bar.set_message(format!(
            "{} {}",
            style(name).cyan().bold(),
            style(format!("({}/{total})", step + 1)).dim()
        ));
        self.bar.tick();
    }
}
