use foundation::math::{Euler, Vec3};
use gpu::{Camera3D, SurfaceHandle};
use scene::World;
use scene::entity::EntityId;

use crate::camera_animator::{CameraAnimator, CameraFlight};

/// Everything one globe instance owns once it has been built.
#[derive(Debug)]
pub struct GlobeState {
    pub world: World,
    pub sphere: EntityId,
    pub radius: f64,
    pub camera: Camera3D,
    pub animator: CameraAnimator,
    pub surface: SurfaceHandle,
    /// Gates idle rotation. Set when a focus flight starts.
    pub is_animating: bool,
}

impl GlobeState {
    /// Start a camera flight toward `target` (world space) and stop idle rotation.
    pub fn focus_on(&mut self, target: Vec3, fallback_look_at: Vec3) -> &CameraFlight {
        self.is_animating = true;
        self.animator.focus_on(&self.camera, target, fallback_look_at)
    }

    pub fn sphere_rotation(&self) -> Option<Euler> {
        self.world.transform(self.sphere).map(|t| t.rotation)
    }

    /// World-space centre of the sphere.
    pub fn sphere_center(&self) -> Vec3 {
        self.world.local_to_world(self.sphere, Vec3::ZERO)
    }

    /// Marker entities in placement order.
    pub fn markers(&self) -> Vec<EntityId> {
        self.world.children(self.sphere)
    }
}
