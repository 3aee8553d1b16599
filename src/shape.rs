//! Placeable shape instances: a solid kind plus its transform and material.

use glam::{Mat3, Mat4, Vec3};

use crate::color::Color;
use crate::math::{compose_model, normal_matrix};
use crate::mesh::MeshData;
use crate::solids;

/// The solids a scene can instantiate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Cone,
    Cylinder,
    Sphere,
    Cube,
}

impl ShapeKind {
    /// Display-name prefix; instance names append a per-kind counter.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cone => "Cone",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cube => "Cube",
        }
    }

    /// Builds the mesh for this kind at the stock tessellation levels.
    pub fn build_mesh(&self) -> MeshData {
        match self {
            ShapeKind::Cone => solids::cone(64),
            ShapeKind::Cylinder => solids::cylinder(64),
            ShapeKind::Sphere => solids::icosphere(5),
            ShapeKind::Cube => solids::cube(),
        }
    }
}

/// A transform or slider axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

fn set_component(v: &mut Vec3, axis: Axis, value: f32) {
    match axis {
        Axis::X => v.x = value,
        Axis::Y => v.y = value,
        Axis::Z => v.z = value,
    }
}

/// One placed shape: mesh, transform sliders, material, and the cached
/// normal matrix from the last successful inversion.
#[derive(Clone, Debug)]
pub struct ShapeInstance {
    pub name: String,
    pub kind: ShapeKind,
    pub mesh: MeshData,
    /// Per-axis scale factors.
    pub size: Vec3,
    /// Per-axis rotation in degrees.
    pub theta: Vec3,
    /// Translation from the scene origin.
    pub distance: Vec3,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
    pub show_wireframe: bool,
    pub show_colors: bool,
    pub show_texture: bool,
    normal_matrix: Mat3,
}

impl ShapeInstance {
    /// Creates an instance with the stock defaults: unit scale, 180 degrees
    /// on every rotation axis, centered, random material colors.
    pub fn new(kind: ShapeKind, name: String) -> Self {
        let mut mesh = kind.build_mesh();
        mesh.color_per_triangle();
        Self {
            name,
            kind,
            mesh,
            size: Vec3::ONE,
            theta: Vec3::splat(180.0),
            distance: Vec3::ZERO,
            ambient: Color::random(),
            diffuse: Color::random(),
            specular: Color::random(),
            shininess: 200.0,
            show_wireframe: true,
            show_colors: true,
            show_texture: true,
            normal_matrix: Mat3::IDENTITY,
        }
    }

    // Slider values are stored as-is; a zero scale only degrades the cached
    // normal matrix, never the stored state.
    pub fn set_scale(&mut self, axis: Axis, value: f32) {
        set_component(&mut self.size, axis, value);
    }

    pub fn set_scale_all(&mut self, value: f32) {
        self.size = Vec3::splat(value);
    }

    pub fn set_rotation(&mut self, axis: Axis, degrees: f32) {
        set_component(&mut self.theta, axis, degrees);
    }

    pub fn set_translation(&mut self, axis: Axis, value: f32) {
        set_component(&mut self.distance, axis, value);
    }

    /// `Translate · Rx · Ry · Rz · Scale` from the current slider state.
    pub fn model_matrix(&self) -> Mat4 {
        compose_model(self.distance, self.theta, self.size)
    }

    /// Recomputes the cached normal matrix from `view · model`.
    ///
    /// When the model-view is singular (zero scale on some axis) the
    /// previous matrix is kept so shading stays finite.
    pub fn update_normal_matrix(&mut self, view: Mat4) {
        if let Some(nm) = normal_matrix(view * self.model_matrix()) {
            self.normal_matrix = nm;
        }
    }

    pub fn normal_matrix(&self) -> Mat3 {
        self.normal_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_instance_uses_stock_defaults() {
        let s = ShapeInstance::new(ShapeKind::Cube, "Cube1".to_string());
        assert_eq!(s.size, Vec3::ONE);
        assert_eq!(s.theta, Vec3::splat(180.0));
        assert_eq!(s.distance, Vec3::ZERO);
        assert_eq!(s.shininess, 200.0);
        assert!(s.show_wireframe && s.show_colors && s.show_texture);
        assert_eq!(s.mesh.colors.len(), s.mesh.vertices.len());
    }

    #[test]
    fn stock_tessellation_levels() {
        assert_eq!(ShapeKind::Cone.build_mesh().triangle_count(), 128);
        assert_eq!(ShapeKind::Cylinder.build_mesh().triangle_count(), 256);
        assert_eq!(
            ShapeKind::Sphere.build_mesh().triangle_count(),
            4 * 4usize.pow(5)
        );
        assert_eq!(ShapeKind::Cube.build_mesh().triangle_count(), 12);
    }

    #[test]
    fn axis_setters_touch_one_component() {
        let mut s = ShapeInstance::new(ShapeKind::Cone, "Cone1".to_string());
        s.set_rotation(Axis::Y, 45.0);
        assert_eq!(s.theta, Vec3::new(180.0, 45.0, 180.0));
        s.set_translation(Axis::Z, -2.0);
        assert_eq!(s.distance, Vec3::new(0.0, 0.0, -2.0));
        s.set_scale_all(0.5);
        assert_eq!(s.size, Vec3::splat(0.5));
    }

    #[test]
    fn singular_scale_keeps_previous_normal_matrix() {
        let mut s = ShapeInstance::new(ShapeKind::Cube, "Cube1".to_string());
        s.set_scale_all(2.0);
        s.update_normal_matrix(Mat4::IDENTITY);
        let cached = s.normal_matrix();
        assert!(cached.abs_diff_eq(Mat3::IDENTITY * 0.5, 1e-5));

        s.set_scale(Axis::Y, 0.0);
        s.update_normal_matrix(Mat4::IDENTITY);
        assert_eq!(s.normal_matrix(), cached);
    }
}
