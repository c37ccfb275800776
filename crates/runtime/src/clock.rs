use std::time::{Duration, Instant};

/// Source of frame timing for a [`FrameLoop`](crate::FrameLoop).
pub trait FrameClock {
    /// Wait for the next frame slot and return the seconds elapsed since the
    /// previous one.
    fn next_delta(&mut self) -> f64;
}

/// Fixed-step clock. Never sleeps, so loops driven by it are replayable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedClock {
    dt_s: f64,
}

impl FixedClock {
    pub fn new(dt_s: f64) -> Self {
        Self { dt_s: dt_s.max(0.0) }
    }

    pub fn fps(fps: u32) -> Self {
        Self::new(1.0 / f64::from(fps.max(1)))
    }

    pub fn dt_s(&self) -> f64 {
        self.dt_s
    }
}

impl FrameClock for FixedClock {
    fn next_delta(&mut self) -> f64 {
        self.dt_s
    }
}

/// Wall-clock pacing at a target frame rate, standing in for a display's
/// vsync callback on native hosts.
#[derive(Debug)]
pub struct WallClock {
    frame_interval: Duration,
    last: Option<Instant>,
}

impl WallClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1))),
            last: None,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

impl FrameClock for WallClock {
    fn next_delta(&mut self) -> f64 {
        let Some(last) = self.last else {
            // First frame: nothing has elapsed yet.
            self.last = Some(Instant::now());
            return 0.0;
        };

        let deadline = last + self.frame_interval;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }

        let now = Instant::now();
        self.last = Some(now);
        now.duration_since(last).as_secs_f64()
    }
}
