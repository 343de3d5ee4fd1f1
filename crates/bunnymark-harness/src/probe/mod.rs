//! Per-frame timing probe.
//!
//! The bootstrap brackets every rendered frame with exactly one
//! `begin`/`end` pair, in that order, with no frames skipped or counted
//! twice. What a probe does inside that window is its own business; the
//! bundled [`FrameProbe`] accumulates frame-time statistics.

use std::time::{Duration, Instant};

/// Measurement window over one rendered frame.
pub trait TimingProbe {
    fn begin(&mut self);
    fn end(&mut self);

    /// Called once when the session winds down. Default: nothing.
    fn report(&self) {}
}

/// Probe that ignores its windows. Handy in tests.
#[derive(Debug, Default)]
pub struct NullProbe;

impl TimingProbe for NullProbe {
    fn begin(&mut self) {}
    fn end(&mut self) {}
}

/// Aggregated frame statistics.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub mean_ms: f32,
    pub min_ms: f32,
    pub max_ms: f32,
    pub fps: f32,
}

/// Frame-time accumulator.
#[derive(Debug, Default)]
pub struct FrameProbe {
    window_start: Option<Instant>,
    frames: u64,
    total: Duration,
    min: Option<Duration>,
    max: Duration,
}

impl FrameProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> FrameStats {
        if self.frames == 0 {
            return FrameStats::default();
        }

        let mean = self.total / self.frames as u32;
        let mean_ms = mean.as_secs_f32() * 1000.0;
        let fps = if mean.as_nanos() > 0 {
            1.0 / mean.as_secs_f32()
        } else {
            0.0
        };

        FrameStats {
            frames: self.frames,
            mean_ms,
            min_ms: self.min.unwrap_or_default().as_secs_f32() * 1000.0,
            max_ms: self.max.as_secs_f32() * 1000.0,
            fps,
        }
    }
}

impl TimingProbe for FrameProbe {
    fn begin(&mut self) {
        debug_assert!(self.window_start.is_none(), "begin without a closing end");
        self.window_start = Some(Instant::now());
    }

    fn end(&mut self) {
        let Some(start) = self.window_start.take() else {
            debug_assert!(false, "end without a matching begin");
            return;
        };

        let dt = start.elapsed();
        self.frames += 1;
        self.total += dt;
        self.max = self.max.max(dt);
        self.min = Some(self.min.map_or(dt, |m| m.min(dt)));
    }

    fn report(&self) {
        let s = self.stats();
        if s.frames == 0 {
            log::info!("no frames were measured");
            return;
        }
        log::info!(
            "{} frames — mean {:.2} ms (min {:.2}, max {:.2}) ≈ {:.1} fps",
            s.frames,
            s.mean_ms,
            s.min_ms,
            s.max_ms,
            s.fps
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_probe_reports_zero_stats() {
        let probe = FrameProbe::new();
        assert_eq!(probe.stats(), FrameStats::default());
    }

    #[test]
    fn one_window_per_frame() {
        let mut probe = FrameProbe::new();
        for _ in 0..3 {
            probe.begin();
            probe.end();
        }

        let s = probe.stats();
        assert_eq!(s.frames, 3);
        assert!(s.min_ms <= s.mean_ms && s.mean_ms <= s.max_ms);
    }
}
