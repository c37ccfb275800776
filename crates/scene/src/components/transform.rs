use foundation::math::{Affine, Euler, Vec3};

/// Local transform relative to the entity's parent (or the scene root).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Euler,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.0),
            rotation: Euler::identity(),
        }
    }

    pub fn translate(position: Vec3) -> Self {
        Self {
            position,
            rotation: Euler::identity(),
        }
    }

    pub fn with_rotation(mut self, rotation: Euler) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn local_affine(&self) -> Affine {
        Affine::from_position_rotation(self.position, self.rotation)
    }
}
