//! Texture-mapped globe with geographic markers and animated camera focus.
//!
//! A [`Globe`] owns one [`GlobeState`] (scene graph, sphere, camera and the
//! active camera flight) and drives it one frame at a time:
//!
//! - [`marker::place_marker`] maps latitude/longitude onto the sphere, attaches
//!   a marker and starts a camera flight toward it.
//! - [`camera_animator::CameraAnimator`] owns the single in-flight animation.
//! - [`render_loop::tick`] applies idle rotation, advances the flight and
//!   renders.

pub mod builder;
pub mod camera_animator;
pub mod config;
pub mod error;
pub mod globe;
pub mod marker;
pub mod render_loop;
pub mod state;

pub use config::*;
pub use error::*;
pub use globe::*;
pub use state::*;
