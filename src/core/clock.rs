//=========================================================================
// Frame Clock
//=========================================================================
//
// Supplies the per-tick elapsed time consumed by `ScreenManager::update`.
//
// Deltas are allowed to vary frame to frame; nothing downstream assumes
// a fixed step. The first tick reports 0.0 so a freshly started host
// loop does not feed a bogus startup delta into running transitions.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

//=== FrameClock ==========================================================

/// Monotonic tick clock for host loops.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    total: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Total time accumulated over all ticks.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Total time accumulated over all ticks, in seconds.
    pub fn total_seconds(&self) -> f32 {
        self.total.as_secs_f32()
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        // saturating: Instant is monotonic, but a caller-supplied `now`
        // may still precede the last tick
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);

        self.last_tick = Some(now);
        self.total += elapsed;
        elapsed.as_secs_f32()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
