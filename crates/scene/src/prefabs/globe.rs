use foundation::math::{Euler, Vec3};

use crate::World;
use crate::components::{Drawable3D, Material, TextureId, Transform};
use crate::entity::EntityId;

/// Tessellation of the globe sphere in both directions.
pub const GLOBE_SEGMENTS: u32 = 80;
/// Fixed axial tilt applied to the globe about x (radians).
pub const GLOBE_TILT_X_RAD: f64 = 0.4;

/// Spawn the textured, tilted globe sphere at the world origin.
pub fn spawn_textured_globe(world: &mut World, radius: f64, texture: TextureId) -> EntityId {
    let entity = world.spawn();
    world.set_transform(
        entity,
        Transform::translate(Vec3::ZERO).with_rotation(Euler::new(GLOBE_TILT_X_RAD, 0.0, 0.0)),
    );
    world.set_drawable_3d(
        entity,
        Drawable3D::sphere(radius, GLOBE_SEGMENTS, Material::texture(texture)),
    );
    entity
}
