use foundation::math::{GeoCoordinate, Vec3};
use scene::entity::EntityId;
use scene::prefabs::spawn_marker;
use tracing::debug;

use crate::state::GlobeState;

/// Result of placing one marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedMarker {
    pub entity: EntityId,
    /// Position relative to the sphere; stays fixed as the globe turns.
    pub local_position: Vec3,
    /// World-space position at the moment of placement; the camera flies here.
    pub world_position: Vec3,
}

/// Drop a marker at `coordinate` and fly the camera to it.
///
/// The focus target is computed with the sphere's rotation as it is right
/// now; later rotation moves the marker but not the flight already started.
pub fn place_marker(state: &mut GlobeState, coordinate: GeoCoordinate) -> PlacedMarker {
    let local_position = coordinate.to_sphere(state.radius);
    let world_position = state.world.local_to_world(state.sphere, local_position);
    let center = state.sphere_center();

    state.focus_on(world_position, center);

    let entity = spawn_marker(&mut state.world, state.sphere, local_position, state.radius);
    debug!(
        lat = coordinate.latitude_deg,
        lon = coordinate.longitude_deg,
        ?local_position,
        ?world_position,
        marker = entity.index(),
        "marker placed"
    );

    PlacedMarker {
        entity,
        local_position,
        world_position,
    }
}
