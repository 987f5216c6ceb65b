//! Spinner shown while the planner "crunches" a total.
//!
//! Pure UX layer: the spinner only appears when stdout is an interactive
//! terminal and `NO_COLOR` is unset, and a disabled spinner never affects
//! the computation or the printed report.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// TTY-aware spinner with Unicode/ASCII fallback.
pub struct ProgressIndicator {
    spinner: Option<ProgressBar>,
}

impl ProgressIndicator {
    /// Start a spinner with the given message, if the terminal allows one.
    pub fn new(message: &str) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        let no_color = std::env::var("NO_COLOR").is_ok();

        let spinner = if is_tty && !no_color {
            let pb = ProgressBar::new_spinner();

            let style = if supports_unicode() {
                ProgressStyle::default_spinner()
                    .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                    .template("{spinner} {msg}")
            } else {
                ProgressStyle::default_spinner()
                    .tick_strings(&["|", "/", "-", "\\"])
                    .template("{spinner} {msg}")
            };
            if let Ok(style) = style {
                pb.set_style(style);
            }

            pb.set_message(message.to_string());
            pb.enable_steady_tick(Duration::from_millis(80));
            Some(pb)
        } else {
            None
        };

        Self { spinner }
    }

    /// Whether a spinner is actually being drawn.
    pub fn enabled(&self) -> bool {
        self.spinner.is_some()
    }

    /// Stop the spinner and erase its line.
    pub fn finish(mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn supports_unicode() -> bool {
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                let value = value.to_uppercase();
                return value.contains("UTF-8") || value.contains("UTF8");
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_tty() {
        // Tests never run against a TTY on CI, so the spinner stays off
        // and finish() is a no-op.
        let indicator = ProgressIndicator::new("Calculating...");
        assert!(!indicator.enabled() || atty::is(atty::Stream::Stdout));
        indicator.finish();
    }
}
