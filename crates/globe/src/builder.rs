use foundation::math::Vec3;
use gpu::{Camera3D, ClearColor, RenderBackend, SurfaceDescriptor, TextureSource};
use scene::World;
use scene::prefabs::spawn_textured_globe;
use tracing::info;

use crate::camera_animator::CameraAnimator;
use crate::config::GlobeConfig;
use crate::error::GlobeError;
use crate::state::GlobeState;

pub const CAMERA_FOV_Y_DEG: f64 = 75.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 1000.0;
pub const CAMERA_START_Z: f64 = 3.0;

/// Assemble scene, camera, surface and textured sphere for `config`.
///
/// Validation happens before the backend is touched, so a rejected config
/// leaves no surface or texture behind.
pub fn build_state<B: RenderBackend>(
    config: &GlobeConfig,
    backend: &mut B,
) -> Result<GlobeState, GlobeError> {
    config.validate()?;
    let texture_source = TextureSource::parse(config.texture_path.as_str())?;

    let surface = backend.create_surface(SurfaceDescriptor {
        width: config.surface_width,
        height: config.surface_height,
        clear_color: ClearColor::transparent(),
    });
    let texture = backend.load_texture(&texture_source);

    let mut world = World::new();
    let sphere = spawn_textured_globe(&mut world, config.radius, texture);

    let mut camera = Camera3D::perspective(CAMERA_FOV_Y_DEG, config.aspect(), CAMERA_NEAR, CAMERA_FAR)
        .with_position(Vec3::new(0.0, 0.0, CAMERA_START_Z));
    camera.look_at(world.local_to_world(sphere, Vec3::ZERO));

    info!(
        width = config.surface_width,
        height = config.surface_height,
        radius = config.radius,
        texture = texture_source.path(),
        "globe built"
    );

    Ok(GlobeState {
        world,
        sphere,
        radius: config.radius,
        camera,
        animator: CameraAnimator::new(),
        surface,
        is_animating: false,
    })
}
