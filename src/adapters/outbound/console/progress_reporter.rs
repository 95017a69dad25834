use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} resolving {msg}";

/// Progress on stderr so stdout carries only the report.
///
/// The graph builder discovers packages as it goes, so the bar is created on
/// the first update and its length follows the growing total. Plain messages
/// printed while the bar is live are routed through `suspend` to keep the
/// bar from being torn.
#[derive(Default)]
pub struct StderrProgressReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn print(&self, message: &str) {
        match self.bar.borrow().as_ref() {
            Some(bar) => bar.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    /// Removes the bar before a final message
    fn clear_bar(&self) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let mut slot = self.bar.borrow_mut();
        let bar = slot.get_or_insert_with(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(Self::bar_style());
            bar
        });
        bar.set_length(total.max(current) as u64);
        bar.set_position(current as u64);
        if let Some(name) = message {
            bar.set_message(name.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }
}
