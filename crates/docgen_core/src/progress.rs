//! crates/docgen_core/src/progress.rs
//!
//! The cosmetic progress indicator shown while a document is being generated.
//! The remote call reports no progress, so this only counts ticks; the shell
//! owns the timers that call `tick_percent` and `tick_step`.

use serde::Serialize;
use std::time::Duration;

/// Interval between percentage ticks.
pub const PROGRESS_TICK: Duration = Duration::from_millis(60);
/// Interval between status-message ticks.
pub const STEP_TICK: Duration = Duration::from_millis(1200);
/// The simulated percentage holds here until the request settles.
pub const PROGRESS_CEILING: u8 = 98;

pub const LOADING_MESSAGES: [&str; 5] = [
    "Analyzing your academic details...",
    "Structuring the cover template...",
    "Applying university formatting guidelines...",
    "Generating high-resolution PDF...",
    "Finalizing document...",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressModel {
    pub percent: u8,
    pub step: usize,
}

impl ProgressModel {
    /// Advances the percentage by one, holding at the ceiling.
    pub fn tick_percent(&mut self) {
        if self.percent < PROGRESS_CEILING {
            self.percent += 1;
        }
    }

    /// Advances to the next status message, stopping at the last one.
    pub fn tick_step(&mut self) {
        if self.step < LOADING_MESSAGES.len() - 1 {
            self.step += 1;
        }
    }

    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.step]
    }
}
