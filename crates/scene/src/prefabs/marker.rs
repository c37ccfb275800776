use foundation::math::Vec3;

use crate::World;
use crate::components::{Drawable3D, Material, Transform};
use crate::entity::EntityId;

/// Marker size relative to the globe radius.
pub const MARKER_RADIUS_RATIO: f64 = 1.0 / 30.0;
pub const MARKER_SEGMENTS: u32 = 14;
pub const MARKER_COLOR: u32 = 0x00ff00;

/// Attach a marker sphere to `parent` at `local_position` (parent space).
///
/// The marker inherits every later change to the parent's rotation.
pub fn spawn_marker(
    world: &mut World,
    parent: EntityId,
    local_position: Vec3,
    globe_radius: f64,
) -> EntityId {
    let marker = world.spawn_child(parent);
    world.set_transform(marker, Transform::translate(local_position));
    world.set_drawable_3d(
        marker,
        Drawable3D::sphere(
            globe_radius * MARKER_RADIUS_RATIO,
            MARKER_SEGMENTS,
            Material::color(MARKER_COLOR),
        ),
    );
    marker
}
