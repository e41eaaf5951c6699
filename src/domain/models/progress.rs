#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;

use std::time::Duration;

/// Percentage added on every tick.
pub const PROGRESS_STEP: u8 = 5;

pub const PROGRESS_TICK: Duration = Duration::from_millis(100);

/// How long a full bar stays on screen before hiding.
pub const PROGRESS_GRACE: Duration = Duration::from_millis(500);

/// Simulated upload gauge. It is not tied to bytes on the wire, each `start`
/// opens a new generation so late updates from an older run are dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadProgress {
    generation: u64,
    percent: u8,
    visible: bool,
}

impl UploadProgress {
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.percent = 0;
        self.visible = true;

        return self.generation;
    }

    pub fn set(&mut self, generation: u64, percent: u8) {
        if generation != self.generation || !self.visible {
            return;
        }

        self.percent = percent.min(100);
    }

    pub fn hide(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }

        self.visible = false;
        self.percent = 0;
    }

    pub fn generation(&self) -> u64 {
        return self.generation;
    }

    pub fn percent(&self) -> u8 {
        return self.percent;
    }

    pub fn is_visible(&self) -> bool {
        return self.visible;
    }
}
