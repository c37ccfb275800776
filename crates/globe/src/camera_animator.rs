use foundation::math::Vec3;
use foundation::time::millis_to_seconds;
use gpu::Camera3D;
use runtime::{Easing, Tween};
use tracing::debug;

/// Where the camera parks relative to the focused point.
pub const CAMERA_STANDOFF: Vec3 = Vec3::new(0.1, 0.1, 0.5);
pub const FOCUS_DURATION_MS: f64 = 2000.0;
pub const FOCUS_EASING: Easing = Easing::QuadraticInOut;

/// Camera position and look-at target at one end of a flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Pose that frames `target` from the fixed standoff.
    pub fn focused_on(target: Vec3) -> Self {
        Self {
            position: target + CAMERA_STANDOFF,
            look_at: target,
        }
    }
}

/// Two tweens sharing one clock: camera position and look-at target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraFlight {
    position: Tween,
    look_at: Tween,
}

impl CameraFlight {
    pub fn new(from: CameraPose, to: CameraPose) -> Self {
        let duration_s = millis_to_seconds(FOCUS_DURATION_MS);
        Self {
            position: Tween::new(from.position, to.position, duration_s, FOCUS_EASING),
            look_at: Tween::new(from.look_at, to.look_at, duration_s, FOCUS_EASING),
        }
    }

    pub fn from_pose(&self) -> CameraPose {
        CameraPose {
            position: self.position.start_value(),
            look_at: self.look_at.start_value(),
        }
    }

    pub fn to_pose(&self) -> CameraPose {
        CameraPose {
            position: self.position.end_value(),
            look_at: self.look_at.end_value(),
        }
    }

    pub fn progress(&self) -> f64 {
        self.position.progress().min(self.look_at.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.position.is_finished() && self.look_at.is_finished()
    }

    /// Advance both tweens by the same delta and return the interpolated pose.
    pub fn advance(&mut self, dt_s: f64) -> CameraPose {
        CameraPose {
            position: self.position.advance(dt_s),
            look_at: self.look_at.advance(dt_s),
        }
    }
}

/// Outcome of advancing the animator for one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlightStatus {
    Idle,
    InFlight,
    /// The flight reached its target on this frame; the slot is now empty.
    Finished,
}

/// Owns at most one camera flight. Starting a new focus replaces the flight
/// in progress, continuing from wherever the camera currently is.
#[derive(Debug, Default)]
pub struct CameraAnimator {
    active: Option<CameraFlight>,
}

impl CameraAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&CameraFlight> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start flying `camera` toward `target`.
    ///
    /// The flight starts from the camera's current pose; any zero component of
    /// the current look-at is taken from `fallback_look_at`.
    pub fn focus_on(
        &mut self,
        camera: &Camera3D,
        target: Vec3,
        fallback_look_at: Vec3,
    ) -> &CameraFlight {
        let from = CameraPose {
            position: camera.position,
            look_at: camera.target.or_where_zero(fallback_look_at),
        };
        let to = CameraPose::focused_on(target);

        if let Some(prev) = &self.active {
            debug!(
                progress = prev.progress(),
                "superseding camera flight in progress"
            );
        }
        debug!(?from, ?to, "camera flight started");
        self.active.insert(CameraFlight::new(from, to))
    }

    /// Advance the active flight and write the interpolated pose into `camera`.
    pub fn advance(&mut self, dt_s: f64, camera: &mut Camera3D) -> FlightStatus {
        let Some(flight) = self.active.as_mut() else {
            return FlightStatus::Idle;
        };

        let pose = flight.advance(dt_s);
        camera.set_position(pose.position);
        camera.look_at(pose.look_at);

        if flight.is_finished() {
            self.active = None;
            debug!("camera flight finished");
            FlightStatus::Finished
        } else {
            FlightStatus::InFlight
        }
    }
}
