use foundation::math::Vec3;

/// Perspective camera described by an eye position and a look-at target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_rad: f64,
    /// Width / height of the surface the camera renders into.
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera3D {
    pub fn perspective(fov_y_deg: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::new(0.0, 0.0, -1.0),
            fov_y_rad: fov_y_deg.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Orient the camera toward `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Column-major view-projection matrix (right-handed, depth in [0, 1]).
    pub fn view_proj_matrix(&self) -> [[f32; 4]; 4] {
        let view = mat4_look_at_rh(
            self.position.as_array(),
            self.target.as_array(),
            [0.0, 1.0, 0.0],
        );
        let aspect = if self.aspect > 0.0 { self.aspect } else { 1.0 };
        let proj = mat4_perspective_rh_z0(self.fov_y_rad, aspect, self.near, self.far);
        mat4_mul(proj, view)
    }
}

fn vec3_sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn vec3_dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn vec3_cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn vec3_normalize(a: [f64; 3]) -> [f64; 3] {
    let n = vec3_dot(a, a).sqrt();
    if n > 1e-10 {
        [a[0] / n, a[1] / n, a[2] / n]
    } else {
        [0.0, 0.0, 0.0]
    }
}

fn mat4_mul(a: [[f32; 4]; 4], b: [[f32; 4]; 4]) -> [[f32; 4]; 4] {
    let mut c = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            c[col][row] = a[0][row] * b[col][0]
                + a[1][row] * b[col][1]
                + a[2][row] * b[col][2]
                + a[3][row] * b[col][3];
        }
    }
    c
}

fn mat4_perspective_rh_z0(fov_y_rad: f64, aspect: f64, near: f64, far: f64) -> [[f32; 4]; 4] {
    let f = 1.0 / (0.5 * fov_y_rad).tan();
    let m00 = (f / aspect) as f32;
    let m11 = f as f32;
    let m22 = (far / (near - far)) as f32;
    let m23 = ((near * far) / (near - far)) as f32;

    [
        [m00, 0.0, 0.0, 0.0],
        [0.0, m11, 0.0, 0.0],
        [0.0, 0.0, m22, -1.0],
        [0.0, 0.0, m23, 0.0],
    ]
}

fn mat4_look_at_rh(eye: [f64; 3], target: [f64; 3], up: [f64; 3]) -> [[f32; 4]; 4] {
    let f = vec3_normalize(vec3_sub(target, eye));
    let s = vec3_normalize(vec3_cross(f, up));
    let u = vec3_cross(s, f);

    let ex = -vec3_dot(s, eye);
    let ey = -vec3_dot(u, eye);
    let ez = vec3_dot(f, eye);

    // Column-major view matrix.
    [
        [s[0] as f32, u[0] as f32, (-f[0]) as f32, 0.0],
        [s[1] as f32, u[1] as f32, (-f[1]) as f32, 0.0],
        [s[2] as f32, u[2] as f32, (-f[2]) as f32, 0.0],
        [ex as f32, ey as f32, ez as f32, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::Camera3D;
    use foundation::math::Vec3;

    fn camera() -> Camera3D {
        let mut cam = Camera3D::perspective(75.0, 1.0, 0.1, 1000.0).with_position(Vec3::new(0.0, 0.0, 3.0));
        cam.look_at(Vec3::ZERO);
        cam
    }

    fn clip(m: [[f32; 4]; 4], p: Vec3) -> [f32; 4] {
        let p = [p.x as f32, p.y as f32, p.z as f32, 1.0f32];
        let mut out = [0.0f32; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|col| m[col][row] * p[col]).sum();
        }
        out
    }

    #[test]
    fn target_lands_at_screen_centre() {
        let c = clip(camera().view_proj_matrix(), Vec3::ZERO);
        assert!(c[3] > 0.0);
        assert!((c[0] / c[3]).abs() < 1e-6);
        assert!((c[1] / c[3]).abs() < 1e-6);
        let depth = c[2] / c[3];
        assert!(depth > 0.0 && depth < 1.0);
    }

    #[test]
    fn points_behind_camera_have_negative_w() {
        let c = clip(camera().view_proj_matrix(), Vec3::new(0.0, 0.0, 10.0));
        assert!(c[3] <= 0.0);
    }

    #[test]
    fn point_above_target_projects_upward() {
        let c = clip(camera().view_proj_matrix(), Vec3::new(0.0, 1.0, 0.0));
        assert!(c[3] > 0.0);
        assert!(c[1] / c[3] > 0.0);
    }
}
