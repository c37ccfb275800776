use foundation::math::Vec3;

/// Easing curves mapping normalized progress `k ∈ [0, 1]` to eased progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    QuadraticIn,
    QuadraticOut,
    /// Accelerate through the first half, decelerate through the second.
    #[default]
    QuadraticInOut,
}

impl Easing {
    pub fn apply(self, k: f64) -> f64 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::QuadraticIn => k * k,
            Easing::QuadraticOut => k * (2.0 - k),
            Easing::QuadraticInOut => {
                let k2 = k * 2.0;
                if k2 < 1.0 {
                    0.5 * k2 * k2
                } else {
                    let k2 = k2 - 1.0;
                    -0.5 * (k2 * (k2 - 2.0) - 1.0)
                }
            }
        }
    }
}

/// Time-based interpolation of a `Vec3` from `from` to `to`.
///
/// The tween owns only its own progress; whoever advances it decides where
/// the interpolated value goes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    duration_s: f64,
    elapsed_s: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, duration_s: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_s: duration_s.max(0.0),
            elapsed_s: 0.0,
            easing,
        }
    }

    pub fn start_value(&self) -> Vec3 {
        self.from
    }

    pub fn end_value(&self) -> Vec3 {
        self.to
    }

    /// Linear progress in `[0, 1]`. Zero-length tweens are always complete.
    pub fn progress(&self) -> f64 {
        if self.duration_s <= 0.0 {
            1.0
        } else {
            (self.elapsed_s / self.duration_s).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn value(&self) -> Vec3 {
        if self.is_finished() {
            // Land exactly on the target regardless of float drift.
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// Advance by `dt_s` seconds (negative deltas are ignored) and return the
    /// new value.
    pub fn advance(&mut self, dt_s: f64) -> Vec3 {
        if dt_s > 0.0 {
            self.elapsed_s = (self.elapsed_s + dt_s).min(self.duration_s);
        }
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, Tween};
    use foundation::math::Vec3;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn quadratic_in_out_shape() {
        let e = Easing::QuadraticInOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert_close(e.apply(0.5), 0.5, 1e-12);
        assert_close(e.apply(0.25), 0.125, 1e-12);
        assert_close(e.apply(0.75), 0.875, 1e-12);
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::QuadraticIn.apply(-1.0), 0.0);
        assert_eq!(Easing::QuadraticOut.apply(2.0), 1.0);
    }

    #[test]
    fn tween_reaches_target_exactly() {
        let from = Vec3::new(0.0, 0.0, 3.0);
        let to = Vec3::new(-0.9, 0.1, 0.5);
        let mut t = Tween::new(from, to, 2.0, Easing::QuadraticInOut);
        for _ in 0..7 {
            t.advance(1.0 / 3.0);
        }
        assert!(t.is_finished());
        assert_eq!(t.value(), to);
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn tween_halfway_is_midpoint_for_symmetric_easing() {
        let mut t = Tween::new(Vec3::ZERO, Vec3::new(2.0, 4.0, -2.0), 2.0, Easing::QuadraticInOut);
        let v = t.advance(1.0);
        assert_close(v.x, 1.0, 1e-12);
        assert_close(v.y, 2.0, 1e-12);
        assert_close(v.z, -1.0, 1e-12);
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let t = Tween::new(Vec3::ZERO, Vec3::Y, 0.0, Easing::Linear);
        assert!(t.is_finished());
        assert_eq!(t.value(), Vec3::Y);
    }
}
