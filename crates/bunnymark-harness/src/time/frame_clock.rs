use std::time::{Duration, Instant};

/// Frame-rate governor: lower bounds on the frame rate the simulation will
/// pretend to run at.
///
/// `min_fps` caps how large a single delta may get; `panic_fps` is the
/// threshold below which no timestep catch-up is attempted at all — the
/// frame is simulated as one step at the clamp instead of many. With both at
/// 1 FPS (the benchmark default), a backgrounded window resumes with a
/// single one-second step rather than a burst of frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsGovernor {
    pub min_fps: f32,
    pub panic_fps: f32,
}

impl Default for FpsGovernor {
    fn default() -> Self {
        Self { min_fps: 1.0, panic_fps: 1.0 }
    }
}

impl FpsGovernor {
    /// Largest delta a single tick may report.
    fn max_delta(&self) -> Duration {
        let floor = self.min_fps.max(self.panic_fps).max(f32::EPSILON);
        Duration::from_secs_f32(1.0 / floor)
    }
}

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Elapsed time in milliseconds, the unit scene updates are fed.
    #[inline]
    pub fn elapsed_ms(&self) -> f32 {
        self.dt * 1000.0
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Designed to be used per render loop so multi-session setups do not share
/// delta-time state. Deltas are clamped by the governor above and by a small
/// lower bound that keeps tight loops from reporting zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clock with the default governor (min 1 FPS, panic threshold 1 FPS).
    pub fn new() -> Self {
        Self::with_governor(FpsGovernor::default())
    }

    pub fn with_governor(governor: FpsGovernor) -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: governor.max_delta(),
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after a surface reconfigure or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn governor_caps_the_delta_at_one_second() {
        let mut clock = FrameClock::new();
        // Pretend the previous tick happened long ago.
        clock.last = Instant::now() - Duration::from_secs(30);

        let ft = clock.tick();
        assert!(ft.dt <= 1.0 + f32::EPSILON, "dt was {}", ft.dt);
    }

    #[test]
    fn tight_loop_never_reports_zero() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(a.dt > 0.0);
        assert!(b.dt > 0.0);
        assert_eq!(b.frame_index, a.frame_index + 1);
    }

    #[test]
    fn elapsed_ms_scales_dt() {
        let ft = FrameTime { dt: 0.5, now: Instant::now(), frame_index: 0 };
        assert_eq!(ft.elapsed_ms(), 500.0);
    }
}
