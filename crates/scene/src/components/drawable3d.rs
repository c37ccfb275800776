use super::Material;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape3D {
    /// UV sphere tessellated into `width_segments` x `height_segments` quads.
    Sphere {
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Drawable3D {
    pub shape: Shape3D,
    pub material: Material,
}

impl Drawable3D {
    pub fn sphere(radius: f64, segments: u32, material: Material) -> Self {
        Self {
            shape: Shape3D::Sphere {
                radius,
                width_segments: segments,
                height_segments: segments,
            },
            material,
        }
    }
}
