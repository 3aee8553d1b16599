//! Orbiting orthographic camera.

use glam::{Mat4, Vec3};

/// A camera orbiting the origin on a sphere, projecting orthographically.
///
/// `theta` is the polar angle from +Z, `phi` the azimuth in the XY plane;
/// both in radians, driven directly by sliders.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub theta: f32,
    pub phi: f32,
    pub radius: f32,
    pub at: Vec3,
    pub up: Vec3,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            radius: 6.0,
            at: Vec3::ZERO,
            up: Vec3::Y,
            left: -3.0,
            right: 3.0,
            bottom: -3.0,
            top: 3.0,
            near: -10.0,
            far: 10.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera position on the orbit sphere.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.theta.sin() * self.phi.cos(),
            self.radius * self.theta.sin() * self.phi.sin(),
            self.radius * self.theta.cos(),
        )
    }

    /// View matrix looking from the orbit position at the target.
    ///
    /// Degenerate poses (zero radius, or looking straight along `up`) fall
    /// back to fixed basis vectors instead of producing NaN columns.
    pub fn view(&self) -> Mat4 {
        let forward = (self.at - self.eye()).normalize_or(Vec3::NEG_Z);
        let right = forward.cross(self.up).normalize_or(Vec3::X);
        let up = right.cross(forward);
        Mat4::look_to_rh(self.eye(), forward, up)
    }

    /// Orthographic projection over the configured box.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    pub fn set_theta(&mut self, theta: f32) {
        self.theta = theta;
    }

    pub fn set_phi(&mut self, phi: f32) {
        self.phi = phi;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn default_pose_looks_down_negative_z() {
        let cam = OrbitCamera::new();
        assert_eq!(cam.eye(), Vec3::new(0.0, 0.0, 6.0));
        // The origin lands 6 units in front of the camera.
        let p = cam.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((p.z - -6.0).abs() < 1e-5);
    }

    #[test]
    fn eye_stays_on_the_orbit_sphere() {
        let mut cam = OrbitCamera::new();
        for (theta, phi) in [(0.3, 1.2), (2.0, -0.4), (1.57, 3.0)] {
            cam.set_theta(theta);
            cam.set_phi(phi);
            assert!((cam.eye().length() - cam.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn degenerate_poses_stay_finite() {
        let mut cam = OrbitCamera::new();
        cam.set_radius(0.0);
        assert!(cam.view().is_finite());

        // Looking straight along the up vector.
        cam.set_radius(6.0);
        cam.set_theta(std::f32::consts::FRAC_PI_2);
        cam.set_phi(std::f32::consts::FRAC_PI_2);
        assert!(cam.view().is_finite());
    }

    #[test]
    fn projection_maps_the_view_box_corners() {
        let cam = OrbitCamera::new();
        let p = cam.projection() * Vec4::new(3.0, 3.0, 0.0, 1.0);
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }
}
