// Path: crates/telemetry/src/time.rs
use std::time::{Duration, Instant};

/// Logs how long a named scope took when it is dropped.
pub struct ScopeTimer {
    label: &'static str,
    start: Instant,
}

impl ScopeTimer {
    /// Starts timing `label`.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// The time elapsed since the timer was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        tracing::debug!(
            target: "letters::timing",
            scope = self.label,
            elapsed_us = self.start.elapsed().as_micros() as u64,
            "scope finished"
        );
    }
}
