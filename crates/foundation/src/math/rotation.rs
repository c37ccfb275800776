//! Rotations and rigid transforms for the scene graph.
//!
//! Conventions:
//! - `Euler` angles are radians, applied in intrinsic `XYZ` order, i.e. the
//!   matrix is `Rx * Ry * Rz` (a point is rotated about z first, then y, then x).
//! - `Mat3` is row-major.

use serde::{Deserialize, Serialize};

use super::Vec3;

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn to_mat3(self) -> Mat3 {
        Mat3::from_euler_xyz(self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn from_euler_xyz(e: Euler) -> Self {
        let (b, a) = e.x.sin_cos();
        let (d, c) = e.y.sin_cos();
        let (f, ef) = e.z.sin_cos();

        let ae = a * ef;
        let af = a * f;
        let be = b * ef;
        let bf = b * f;

        Self {
            rows: [
                [c * ef, -c * f, d],
                [af + be * d, ae - bf * d, -b * c],
                [bf - ae * d, be + af * d, a * c],
            ],
        }
    }

    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }

    pub fn mul_mat3(&self, other: &Mat3) -> Mat3 {
        let mut out = [[0.0f64; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..3)
                    .map(|k| self.rows[row][k] * other.rows[k][col])
                    .sum();
            }
        }
        Mat3 { rows: out }
    }
}

/// Rotation followed by translation. Scale is always 1 in this scene graph.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub rotation: Mat3,
    pub translation: Vec3,
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        rotation: Mat3::IDENTITY,
        translation: Vec3::ZERO,
    };

    pub fn new(rotation: Mat3, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Euler) -> Self {
        Self::new(rotation.to_mat3(), position)
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation.mul_vec3(p) + self.translation
    }

    /// `self * child`: express a child-local transform in this transform's parent space.
    pub fn then(&self, child: &Affine) -> Affine {
        Affine {
            rotation: self.rotation.mul_mat3(&child.rotation),
            translation: self.transform_point(child.translation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Affine, Euler, Mat3};
    use crate::math::Vec3;

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f64) {
        let diff = a.distance(b);
        assert!(diff <= eps, "expected {a:?} ~= {b:?} (diff {diff})");
    }

    #[test]
    fn zero_euler_is_identity() {
        assert_eq!(Mat3::from_euler_xyz(Euler::identity()), Mat3::IDENTITY);
    }

    #[test]
    fn yaw_quarter_turn_maps_x_to_minus_z() {
        let m = Euler::new(0.0, std::f64::consts::FRAC_PI_2, 0.0).to_mat3();
        assert_vec_close(m.mul_vec3(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 0.0, -1.0), 1e-12);
    }

    #[test]
    fn euler_order_is_x_after_y() {
        let e = Euler::new(0.4, 0.3, 0.0);
        let rx = Euler::new(0.4, 0.0, 0.0).to_mat3();
        let ry = Euler::new(0.0, 0.3, 0.0).to_mat3();
        let p = Vec3::new(0.2, -0.7, 1.1);
        assert_vec_close(e.to_mat3().mul_vec3(p), rx.mul_vec3(ry.mul_vec3(p)), 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let m = Euler::new(0.4, 1.3, -0.2).to_mat3();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!((m.mul_vec3(p).length() - p.length()).abs() < 1e-12);
    }

    #[test]
    fn composed_affine_matches_nested_application() {
        let parent = Affine::from_position_rotation(Vec3::new(1.0, 0.0, 0.0), Euler::new(0.4, 0.0, 0.0));
        let child = Affine::from_position_rotation(Vec3::new(0.0, 2.0, 0.0), Euler::new(0.0, 0.7, 0.0));
        let p = Vec3::new(0.5, 0.5, 0.5);
        let nested = parent.transform_point(child.transform_point(p));
        assert_vec_close(parent.then(&child).transform_point(p), nested, 1e-12);
    }
}
