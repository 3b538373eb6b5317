//! Playback clock for the animation timeline.
//!
//! Frame snapshots are pure functions of elapsed seconds, so playback
//! control is nothing more than deciding what "elapsed" means. The clock
//! supports pause/resume and seeking without touching any animation state.

use web_time::Instant;

/// Wall-clock-backed animation time with pause and seek.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    started: Instant,
    /// Accumulated seconds from before the last (re)start.
    accumulated: f32,
    paused: bool,
}

impl PlaybackClock {
    /// Start running from t = 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            accumulated: 0.0,
            paused: false,
        }
    }

    /// Current animation time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        if self.paused {
            self.accumulated
        } else {
            self.accumulated + self.started.elapsed().as_secs_f32()
        }
    }

    /// Freeze animation time.
    pub fn pause(&mut self) {
        if !self.paused {
            self.accumulated += self.started.elapsed().as_secs_f32();
            self.paused = true;
        }
    }

    /// Resume from the frozen time.
    pub fn resume(&mut self) {
        if self.paused {
            self.started = Instant::now();
            self.paused = false;
        }
    }

    /// Jump to an absolute animation time, preserving the pause state.
    pub fn seek(&mut self, seconds: f32) {
        self.accumulated = seconds.max(0.0);
        self.started = Instant::now();
    }

    /// Whether the clock is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_clock_holds_its_time() {
        let mut clock = PlaybackClock::new();
        clock.pause();
        let t0 = clock.elapsed();
        std::thread::sleep(web_time::Duration::from_millis(5));
        assert_eq!(clock.elapsed(), t0);
    }

    #[test]
    fn seek_jumps_and_clamps() {
        let mut clock = PlaybackClock::new();
        clock.pause();
        clock.seek(4.5);
        assert!((clock.elapsed() - 4.5).abs() < 1e-6);
        clock.seek(-1.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn resume_continues_from_pause_point() {
        let mut clock = PlaybackClock::new();
        clock.pause();
        clock.seek(2.0);
        clock.resume();
        assert!(!clock.is_paused());
        assert!(clock.elapsed() >= 2.0);
    }
}
