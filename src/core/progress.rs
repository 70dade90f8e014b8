// src/core/progress.rs

use std::time::Duration;

/// Braille spinner used by the scanning view.
pub const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SPINNER_FRAME: Duration = Duration::from_millis(80);
const PERCENT_TICK: Duration = Duration::from_millis(35);

pub struct ScanStep {
    pub label: &'static str,
    pub duration: Duration,
}

pub const SCAN_STEPS: [ScanStep; 4] = [
    ScanStep { label: "Reading document structure", duration: Duration::from_millis(800) },
    ScanStep { label: "Extracting text and content", duration: Duration::from_millis(1000) },
    ScanStep { label: "Analyzing with AI engine", duration: Duration::from_millis(1200) },
    ScanStep { label: "Generating insights", duration: Duration::from_millis(500) },
];

/// What the scanning view should show at a given moment. The animation is
/// driven purely by wall-clock time, not by backend progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub percent: u16,
    pub current_step: usize,
    pub spinner_frame: usize,
}

impl ProgressSnapshot {
    pub fn at(elapsed: Duration) -> Self {
        let percent = (elapsed.as_millis() / PERCENT_TICK.as_millis()).min(100) as u16;

        let mut started = Duration::ZERO;
        let mut current_step = 0;
        for (index, step) in SCAN_STEPS.iter().enumerate() {
            if elapsed >= started {
                current_step = index;
            }
            started += step.duration;
        }

        let spinner_frame = (elapsed.as_millis() / SPINNER_FRAME.as_millis()) as usize % SPINNER_CHARS.len();

        Self { percent, current_step, spinner_frame }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_CHARS[self.spinner_frame]
    }
}
