use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// StderrProgressReporter adapter for reporting diagnostics to stderr
///
/// Writes to stderr so diagnostics never mix with the lookup result on
/// stdout. While a slow operation is running a spinner is shown; indicatif
/// hides it automatically when stderr is not a terminal.
///
/// Clones share the same spinner state.
#[derive(Clone, Default)]
pub struct StderrProgressReporter {
    spinner: Arc<Mutex<Option<ProgressBar>>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.spinner.lock().ok().and_then(|s| s.clone()) {
            Some(pb) => pb.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    fn report_waiting(&self, message: &str) {
        self.finish_spinner();

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }
}
