use gpu::{RenderBackend, Renderer};
use tracing::{debug, trace};

use crate::camera_animator::FlightStatus;
use crate::state::GlobeState;

/// Idle spin applied about the vertical axis on every frame (radians).
pub const IDLE_ROTATION_STEP_RAD: f64 = 0.002;

/// What one frame did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub rotated: bool,
    pub flight: FlightStatus,
}

/// Run one frame: idle rotation, camera flight, render.
///
/// Rescheduling belongs to the caller's frame loop; this function never
/// re-enters itself. The idle step is per frame, not per second, so the spin
/// rate follows the display's frame rate.
pub fn tick<B: RenderBackend>(
    state: &mut GlobeState,
    dt_s: f64,
    backend: &mut B,
    resume_idle_rotation: bool,
) -> FrameReport {
    let mut rotated = false;
    if !state.is_animating
        && let Some(transform) = state.world.transform_mut(state.sphere)
    {
        transform.rotation.y += IDLE_ROTATION_STEP_RAD;
        rotated = true;
    }

    let flight = state.animator.advance(dt_s, &mut state.camera);
    if flight == FlightStatus::Finished && resume_idle_rotation {
        debug!("camera flight done, resuming idle rotation");
        state.is_animating = false;
    }

    let frame = Renderer::collect_3d(&state.world, state.camera);
    backend.render(state.surface, &frame);
    trace!(dt_s, rotated, ?flight, commands = frame.commands.len(), "frame");

    FrameReport { rotated, flight }
}

#[cfg(test)]
mod tests {
    use super::{IDLE_ROTATION_STEP_RAD, tick};
    use crate::builder::build_state;
    use crate::camera_animator::FlightStatus;
    use crate::config::GlobeConfig;
    use crate::marker::place_marker;
    use foundation::math::GeoCoordinate;
    use gpu::HeadlessBackend;
    use scene::World;

    #[test]
    fn idle_globe_turns_by_fixed_step_each_frame() {
        let mut backend = HeadlessBackend::new();
        let mut state = build_state(&GlobeConfig::new("earth.jpg"), &mut backend).expect("builds");

        for i in 0..5 {
            let before = state.sphere_rotation().map(|r| r.y).unwrap_or_default();
            // Step size does not depend on elapsed time.
            let report = tick(&mut state, 0.001 * f64::from(i + 1), &mut backend, false);
            let after = state.sphere_rotation().map(|r| r.y).unwrap_or_default();
            assert!(report.rotated);
            assert_eq!(after, before + IDLE_ROTATION_STEP_RAD);
        }
        assert_eq!(backend.frames_rendered(), 5);
    }

    #[test]
    fn no_idle_rotation_while_animating() {
        let mut backend = HeadlessBackend::new();
        let mut state = build_state(&GlobeConfig::new("earth.jpg"), &mut backend).expect("builds");
        tick(&mut state, 1.0 / 60.0, &mut backend, false);
        place_marker(&mut state, GeoCoordinate::new(45.0, 90.0));
        let frozen = state.sphere_rotation();

        // Well past the end of the flight: the flag stays set.
        for _ in 0..300 {
            let report = tick(&mut state, 1.0 / 60.0, &mut backend, false);
            assert!(!report.rotated);
        }
        assert_eq!(state.sphere_rotation(), frozen);
        assert!(state.is_animating);
        assert_eq!(backend.frames_rendered(), 301);
    }

    #[test]
    fn idle_rotation_resumes_when_enabled() {
        let mut backend = HeadlessBackend::new();
        let mut state = build_state(&GlobeConfig::new("earth.jpg"), &mut backend).expect("builds");
        place_marker(&mut state, GeoCoordinate::new(0.0, 0.0));

        let first = tick(&mut state, 1.5, &mut backend, true);
        assert_eq!(first.flight, FlightStatus::InFlight);
        let second = tick(&mut state, 1.5, &mut backend, true);
        assert_eq!(second.flight, FlightStatus::Finished);
        assert!(!second.rotated);
        assert!(!state.is_animating);

        let third = tick(&mut state, 1.0 / 60.0, &mut backend, true);
        assert!(third.rotated);
        assert_eq!(third.flight, FlightStatus::Idle);
    }

    #[test]
    fn sphere_without_transform_still_renders() {
        let mut backend = HeadlessBackend::new();
        let mut state = build_state(&GlobeConfig::new("earth.jpg"), &mut backend).expect("builds");
        state.world = World::new();
        state.sphere = state.world.spawn();

        let report = tick(&mut state, 1.0 / 60.0, &mut backend, false);
        assert!(!report.rotated);
        assert!(state.sphere_rotation().is_none());
        assert_eq!(backend.frames_rendered(), 1);
        assert!(backend.last_frame().is_some_and(|f| f.commands.is_empty()));
    }

    #[test]
    fn each_frame_renders_sphere_and_markers() {
        let mut backend = HeadlessBackend::new();
        let mut state = build_state(&GlobeConfig::new("earth.jpg"), &mut backend).expect("builds");
        place_marker(&mut state, GeoCoordinate::new(1.0, 2.0));
        place_marker(&mut state, GeoCoordinate::new(3.0, 4.0));
        tick(&mut state, 0.5, &mut backend, false);

        let Some(frame) = backend.last_frame() else {
            panic!("tick must render");
        };
        assert_eq!(frame.commands.len(), 3);
        assert_eq!(frame.camera, state.camera);
    }
}
