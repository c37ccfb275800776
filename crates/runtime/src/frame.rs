use foundation::time::Time;

/// Frame metadata handed to every frame callback.
///
/// With a fixed-step clock this is fully deterministic and can be recorded
/// and replayed; with a wall clock `dt_s` is the measured elapsed time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Seconds elapsed since the previous frame.
    pub dt_s: f64,
    /// Accumulated time at the end of this frame (seconds).
    pub time: Time,
}

impl Frame {
    /// The first frame of a loop.
    pub fn first(dt_s: f64) -> Self {
        Self {
            index: 0,
            dt_s,
            time: Time(dt_s),
        }
    }

    /// The frame after `self`, `dt_s` seconds later.
    pub fn following(self, dt_s: f64) -> Self {
        Self {
            index: self.index + 1,
            dt_s,
            time: self.time.advance(dt_s),
        }
    }
}
