//! Host application lifecycle.
//!
//! Pass-through for now: the phase is recorded and logged, and neither the
//! engine thread nor the rendering context reacts to pause or resume.

use parking_lot::Mutex;

/// Last activity lifecycle callback observed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActivityPhase {
    Created,
    Resumed,
    Paused,
}

pub struct ActivityLifecycleAdapter {
    phase: Mutex<Option<ActivityPhase>>,
    log_tag: String,
}

impl ActivityLifecycleAdapter {
    pub fn new(log_tag: impl Into<String>) -> Self {
        Self {
            phase: Mutex::new(None),
            log_tag: log_tag.into(),
        }
    }

    /// Returns `None` until the host reports the activity created.
    pub fn phase(&self) -> Option<ActivityPhase> {
        *self.phase.lock()
    }

    pub fn on_create(&self) {
        self.enter(ActivityPhase::Created);
    }

    pub fn on_resume(&self) {
        self.enter(ActivityPhase::Resumed);
    }

    pub fn on_pause(&self) {
        self.enter(ActivityPhase::Paused);
    }

    fn enter(&self, phase: ActivityPhase) {
        let prev = self.phase.lock().replace(phase);
        log::debug!(target: self.log_tag.as_str(), "activity {prev:?} -> {phase:?}");
    }
}
