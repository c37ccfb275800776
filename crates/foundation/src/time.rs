/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64); // seconds

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn advance(self, dt_s: f64) -> Self {
        Time(self.0 + dt_s)
    }
}

/// Convert a millisecond duration to the seconds timebase used by `Time`.
pub fn millis_to_seconds(ms: f64) -> f64 {
    ms / 1000.0
}

#[cfg(test)]
mod tests {
    use super::{Time, millis_to_seconds};

    #[test]
    fn advance_accumulates_seconds() {
        let t = Time::ZERO.advance(0.5).advance(0.25);
        assert_eq!(t, Time(0.75));
        assert!(Time(1.0) > t);
    }

    #[test]
    fn millis_convert_to_seconds() {
        assert_eq!(millis_to_seconds(2000.0), 2.0);
    }
}
