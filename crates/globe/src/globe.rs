use foundation::math::{Euler, GeoCoordinate};
use gpu::{Camera3D, RenderBackend, SurfaceHandle};
use runtime::{Frame, FrameClock, FrameLoop};
use scene::entity::EntityId;

use crate::builder::build_state;
use crate::config::GlobeConfig;
use crate::error::GlobeError;
use crate::marker::{PlacedMarker, place_marker};
use crate::render_loop::{FrameReport, tick};
use crate::state::GlobeState;

/// A globe bound to its render backend.
///
/// Lifecycle: [`Globe::new`] → [`Globe::build`] once → any number of
/// [`Globe::place_marker`] / [`Globe::render_frame`] calls, or hand control
/// to [`Globe::run`].
#[derive(Debug)]
pub struct Globe<B: RenderBackend> {
    config: GlobeConfig,
    backend: B,
    state: Option<GlobeState>,
}

impl<B: RenderBackend> Globe<B> {
    pub fn new(config: GlobeConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            state: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> Option<&GlobeState> {
        self.state.as_ref()
    }

    /// Build the scene and return the surface the host should embed.
    pub fn build(&mut self) -> Result<SurfaceHandle, GlobeError> {
        if self.state.is_some() {
            return Err(GlobeError::AlreadyBuilt);
        }
        let state = build_state(&self.config, &mut self.backend)?;
        let surface = state.surface;
        self.state = Some(state);
        Ok(surface)
    }

    /// Place a marker and start flying the camera to it.
    ///
    /// Latitude must be within [-90, 90] and longitude within [-180, 180].
    pub fn place_marker(
        &mut self,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<PlacedMarker, GlobeError> {
        let state = self.state.as_mut().ok_or(GlobeError::NotBuilt)?;
        let coordinate = GeoCoordinate::new(latitude_deg, longitude_deg);
        if !coordinate.is_in_range() {
            return Err(GlobeError::CoordinateOutOfRange {
                latitude_deg,
                longitude_deg,
            });
        }
        Ok(place_marker(state, coordinate))
    }

    /// Run one frame of the render loop.
    pub fn render_frame(&mut self, dt_s: f64) -> Result<FrameReport, GlobeError> {
        let state = self.state.as_mut().ok_or(GlobeError::NotBuilt)?;
        Ok(tick(
            state,
            dt_s,
            &mut self.backend,
            self.config.resume_idle_rotation,
        ))
    }

    /// Drive the render loop until `frame_loop`'s handle is stopped.
    ///
    /// `on_frame` runs before each rendered frame and may place markers or
    /// stop the loop. Returns the number of frames rendered.
    pub fn run<C: FrameClock>(
        &mut self,
        frame_loop: &mut FrameLoop<C>,
        mut on_frame: impl FnMut(&mut Self, Frame),
    ) -> Result<u64, GlobeError> {
        if self.state.is_none() {
            return Err(GlobeError::NotBuilt);
        }
        let mut rendered = 0u64;
        let mut failure = None;
        let handle = frame_loop.handle();
        frame_loop.run(|frame| {
            on_frame(self, frame);
            match self.render_frame(frame.dt_s) {
                Ok(_) => rendered += 1,
                Err(err) => {
                    failure = Some(err);
                    handle.stop();
                }
            }
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(rendered),
        }
    }

    pub fn camera(&self) -> Option<&Camera3D> {
        self.state.as_ref().map(|s| &s.camera)
    }

    pub fn sphere_rotation(&self) -> Option<Euler> {
        self.state.as_ref().and_then(|s| s.sphere_rotation())
    }

    pub fn is_animating(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.is_animating)
    }

    pub fn markers(&self) -> Vec<EntityId> {
        self.state
            .as_ref()
            .map(|s| s.markers())
            .unwrap_or_default()
    }
}
