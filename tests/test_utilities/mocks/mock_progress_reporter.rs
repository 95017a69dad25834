use dep_visualizer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter capturing messages and progress updates
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
    pub progress: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// `(current, total)` pairs in the order they were reported
    pub fn get_progress(&self) -> Vec<(usize, usize)> {
        self.progress.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.lock().unwrap().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}
