//! The editable scene: shapes, lights, camera, and the per-frame data feed.
//!
//! [`Scene`] is the single mutable root the control surface talks to. All
//! edits go through its setters; most forward to the currently selected
//! shape and do nothing when the scene is empty, so sliders never need
//! existence checks. [`Scene::tick`] advances animation once per frame and
//! [`Scene::frame`] emits the uniform blocks each shape needs drawn.

use glam::Vec3;

use crate::camera::OrbitCamera;
use crate::color::{Color, ColorParseError};
use crate::light::{Light, LightKind};
use crate::shape::{Axis, ShapeInstance, ShapeKind};
use crate::upload::{LightingUniforms, ShapeUniforms};

/// Hard cap on scene shapes.
pub const MAX_SHAPES: usize = 7;

/// Selects one of the two scene lights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightId {
    Directional,
    Positional,
}

/// A material or light color channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialChannel {
    Ambient,
    Diffuse,
    Specular,
}

/// A world-axis guide line with a flat color.
#[derive(Clone, Copy, Debug)]
pub struct AxisLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 4],
}

/// Everything needed to draw one shape this frame.
pub struct ShapeDraw<'a> {
    pub shape: &'a ShapeInstance,
    pub transform: ShapeUniforms,
    pub lighting: LightingUniforms,
}

/// The scene state: up to [`MAX_SHAPES`] shapes, two orbiting lights, and
/// an orbiting camera.
pub struct Scene {
    shapes: Vec<ShapeInstance>,
    current: Option<usize>,
    /// Per-kind counters for generated display names, 1-based.
    next_id: [u32; 4],
    pub directional: Light,
    pub positional: Light,
    pub camera: OrbitCamera,
}

fn kind_index(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::Cone => 0,
        ShapeKind::Cylinder => 1,
        ShapeKind::Sphere => 2,
        ShapeKind::Cube => 3,
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            current: None,
            next_id: [1; 4],
            directional: Light::new(LightKind::Directional, 0.0, -10.0),
            positional: Light::new(LightKind::Positional, std::f32::consts::PI, 10.0),
            camera: OrbitCamera::new(),
        }
    }

    // ----- shape list management -----

    /// Adds a shape with a generated name ("Cone1", "Cone2", ...) and
    /// selects it. Returns `None` when the scene is full.
    pub fn add_shape(&mut self, kind: ShapeKind) -> Option<&ShapeInstance> {
        if self.shapes.len() >= MAX_SHAPES {
            return None;
        }
        let counter = &mut self.next_id[kind_index(kind)];
        let name = format!("{}{}", kind.label(), counter);
        *counter += 1;

        self.shapes.push(ShapeInstance::new(kind, name));
        self.current = Some(self.shapes.len() - 1);
        self.shapes.last()
    }

    /// Removes the selected shape. Selection falls back to the first
    /// remaining shape; removing the last one resets the name counters.
    pub fn remove_current(&mut self) {
        let Some(index) = self.current else {
            return;
        };
        self.shapes.remove(index);
        if self.shapes.is_empty() {
            self.current = None;
            self.next_id = [1; 4];
        } else {
            self.current = Some(0);
        }
    }

    /// Empties the scene and restarts the name counters.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.current = None;
        self.next_id = [1; 4];
    }

    /// Selects a shape by display name. Returns false when absent.
    pub fn select(&mut self, name: &str) -> bool {
        match self.shapes.iter().position(|s| s.name == name) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn shapes(&self) -> &[ShapeInstance] {
        &self.shapes
    }

    pub fn current_shape(&self) -> Option<&ShapeInstance> {
        self.current.map(|i| &self.shapes[i])
    }

    fn current_shape_mut(&mut self) -> Option<&mut ShapeInstance> {
        self.current.map(|i| &mut self.shapes[i])
    }

    // ----- setters forwarding to the selected shape -----
    // All are silent no-ops while nothing is selected.

    pub fn set_scale(&mut self, axis: Axis, value: f32) {
        if let Some(shape) = self.current_shape_mut() {
            shape.set_scale(axis, value);
        }
    }

    pub fn set_scale_all(&mut self, value: f32) {
        if let Some(shape) = self.current_shape_mut() {
            shape.set_scale_all(value);
        }
    }

    pub fn set_rotation(&mut self, axis: Axis, degrees: f32) {
        if let Some(shape) = self.current_shape_mut() {
            shape.set_rotation(axis, degrees);
        }
    }

    pub fn set_translation(&mut self, axis: Axis, value: f32) {
        if let Some(shape) = self.current_shape_mut() {
            shape.set_translation(axis, value);
        }
    }

    /// Updates one material channel of the selected shape from a color
    /// picker value. Malformed hex is an error even with nothing selected.
    pub fn set_material_channel(
        &mut self,
        channel: MaterialChannel,
        hex: &str,
    ) -> Result<(), ColorParseError> {
        let color = Color::from_hex(hex)?;
        if let Some(shape) = self.current_shape_mut() {
            match channel {
                MaterialChannel::Ambient => shape.ambient.set_rgb(color),
                MaterialChannel::Diffuse => shape.diffuse.set_rgb(color),
                MaterialChannel::Specular => shape.specular.set_rgb(color),
            }
        }
        Ok(())
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        if let Some(shape) = self.current_shape_mut() {
            shape.shininess = shininess;
        }
    }

    pub fn toggle_wireframe(&mut self) {
        if let Some(shape) = self.current_shape_mut() {
            shape.show_wireframe = !shape.show_wireframe;
        }
    }

    pub fn toggle_colors(&mut self) {
        if let Some(shape) = self.current_shape_mut() {
            shape.show_colors = !shape.show_colors;
        }
    }

    pub fn toggle_texture(&mut self) {
        if let Some(shape) = self.current_shape_mut() {
            shape.show_texture = !shape.show_texture;
        }
    }

    // ----- lights -----

    pub fn light(&self, id: LightId) -> &Light {
        match id {
            LightId::Directional => &self.directional,
            LightId::Positional => &self.positional,
        }
    }

    fn light_mut(&mut self, id: LightId) -> &mut Light {
        match id {
            LightId::Directional => &mut self.directional,
            LightId::Positional => &mut self.positional,
        }
    }

    pub fn set_light_color(
        &mut self,
        id: LightId,
        channel: MaterialChannel,
        hex: &str,
    ) -> Result<(), ColorParseError> {
        let color = Color::from_hex(hex)?;
        let light = self.light_mut(id);
        match channel {
            MaterialChannel::Ambient => light.set_ambient(color),
            MaterialChannel::Diffuse => light.set_diffuse(color),
            MaterialChannel::Specular => light.set_specular(color),
        }
        Ok(())
    }

    pub fn set_light_strength(&mut self, id: LightId, strength: f32) {
        self.light_mut(id).set_strength(strength);
    }

    pub fn set_light_theta(&mut self, id: LightId, theta: f32) {
        self.light_mut(id).set_theta(theta);
    }

    pub fn set_light_x_offset(&mut self, id: LightId, x_offset: f32) {
        self.light_mut(id).set_x_offset(x_offset);
    }

    pub fn toggle_light(&mut self, id: LightId) {
        self.light_mut(id).toggle();
    }

    pub fn toggle_light_animation(&mut self, id: LightId) {
        self.light_mut(id).toggle_animation();
    }

    // ----- camera -----

    pub fn set_camera_theta(&mut self, theta: f32) {
        self.camera.set_theta(theta);
    }

    pub fn set_camera_phi(&mut self, phi: f32) {
        self.camera.set_phi(phi);
    }

    pub fn set_camera_radius(&mut self, radius: f32) {
        self.camera.set_radius(radius);
    }

    // ----- per-frame work -----

    /// Advances both light orbits one step and refreshes each shape's
    /// cached normal matrix against the current view.
    pub fn tick(&mut self) {
        self.directional.advance();
        self.positional.advance();

        let view = self.camera.view();
        for shape in &mut self.shapes {
            shape.update_normal_matrix(view);
        }
    }

    /// Produces the uniform blocks for every shape in draw order.
    pub fn frame(&self) -> Vec<ShapeDraw<'_>> {
        let view = self.camera.view();
        let projection = self.camera.projection();
        let eye = self.camera.eye();

        self.shapes
            .iter()
            .map(|shape| {
                let transform = ShapeUniforms::new(
                    view * shape.model_matrix(),
                    projection,
                    shape.normal_matrix(),
                    eye,
                    shape.shininess,
                );
                let lighting = LightingUniforms::new(
                    self.directional.ambient_product(shape.ambient),
                    self.directional.diffuse_product(shape.diffuse),
                    self.directional.specular_product(shape.specular),
                    self.positional.ambient_product(shape.ambient),
                    self.positional.diffuse_product(shape.diffuse),
                    self.positional.specular_product(shape.specular),
                    self.directional.position(),
                    self.positional.position(),
                );
                ShapeDraw {
                    shape,
                    transform,
                    lighting,
                }
            })
            .collect()
    }

    /// The three world-axis guide lines.
    pub fn axis_lines(&self) -> [AxisLine; 3] {
        let extent = 100.0;
        let line = |dir: Vec3, color: Color| AxisLine {
            start: dir * -extent,
            end: dir * extent,
            color: color.to_array(),
        };
        [
            line(Vec3::X, Color::rgba(1.0, 0.0, 0.0, 0.8)),
            line(Vec3::Y, Color::rgba(0.0, 1.0, 0.0, 0.8)),
            line(Vec3::Z, Color::rgba(0.0, 0.0, 1.0, 0.8)),
        ]
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn add_caps_out_at_max_shapes() {
        let mut scene = Scene::new();
        for _ in 0..MAX_SHAPES {
            assert!(scene.add_shape(ShapeKind::Cube).is_some());
        }
        assert!(scene.add_shape(ShapeKind::Cone).is_none());
        assert_eq!(scene.shapes().len(), MAX_SHAPES);
    }

    #[test]
    fn names_count_per_kind() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cone);
        scene.add_shape(ShapeKind::Sphere);
        scene.add_shape(ShapeKind::Cone);
        let names: Vec<_> = scene.shapes().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Cone1", "Sphere1", "Cone2"]);
    }

    #[test]
    fn clearing_resets_name_counters() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cylinder);
        scene.add_shape(ShapeKind::Cylinder);
        scene.clear();
        scene.add_shape(ShapeKind::Cylinder);
        assert_eq!(scene.shapes()[0].name, "Cylinder1");
    }

    #[test]
    fn remove_falls_back_to_first_shape() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cone);
        scene.add_shape(ShapeKind::Cube);
        scene.add_shape(ShapeKind::Sphere);
        assert_eq!(scene.current_shape().map(|s| s.name.as_str()), Some("Sphere1"));
        scene.remove_current();
        assert_eq!(scene.current_shape().map(|s| s.name.as_str()), Some("Cone1"));
    }

    #[test]
    fn removing_the_last_shape_resets_counters() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cone);
        scene.remove_current();
        assert!(scene.current_shape().is_none());
        scene.add_shape(ShapeKind::Cone);
        assert_eq!(scene.shapes()[0].name, "Cone1");
    }

    #[test]
    fn edits_without_a_selection_are_no_ops() {
        let mut scene = Scene::new();
        scene.remove_current();
        scene.set_scale(Axis::X, 2.0);
        scene.set_shininess(50.0);
        scene.toggle_wireframe();
        assert!(scene.set_material_channel(MaterialChannel::Diffuse, "#102030").is_ok());
        // Malformed hex still errors with nothing selected.
        assert!(scene.set_material_channel(MaterialChannel::Diffuse, "nope").is_err());
    }

    #[test]
    fn display_toggles_flip_the_selected_shape() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cube);
        scene.toggle_wireframe();
        scene.toggle_texture();
        let shape = scene.current_shape().unwrap();
        assert!(!shape.show_wireframe);
        assert!(shape.show_colors);
        assert!(!shape.show_texture);
    }

    #[test]
    fn select_by_name() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cone);
        scene.add_shape(ShapeKind::Cube);
        assert!(scene.select("Cone1"));
        assert_eq!(scene.current_shape().map(|s| s.name.as_str()), Some("Cone1"));
        assert!(!scene.select("Pyramid1"));
    }

    #[test]
    fn hidden_light_zeroes_its_frame_products() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cube);
        scene.toggle_light(LightId::Directional);
        let draws = scene.frame();
        let off = [0.0, 0.0, 0.0, 1.0];
        assert_eq!(draws[0].lighting.ambient_directional, off);
        assert_eq!(draws[0].lighting.diffuse_directional, off);
        assert_eq!(draws[0].lighting.specular_directional, off);
        // The positional light is untouched.
        assert_ne!(draws[0].lighting.ambient_positional, off);
    }

    #[test]
    fn light_positions_carry_their_kind_w() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cone);
        let draws = scene.frame();
        assert_eq!(draws[0].lighting.directional_position[3], 0.0);
        assert_eq!(draws[0].lighting.positional_position[3], 1.0);
    }

    #[test]
    fn tick_advances_both_lights_once() {
        let mut scene = Scene::new();
        let d0 = scene.directional.theta;
        let p0 = scene.positional.theta;
        scene.tick();
        assert!((scene.directional.theta - d0 - scene.directional.step).abs() < 1e-6);
        assert!((scene.positional.theta - p0 - scene.positional.step).abs() < 1e-6);
    }

    #[test]
    fn tick_skips_normal_matrix_updates_for_singular_shapes() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cube);
        scene.tick();
        let before = scene.current_shape().map(|s| s.normal_matrix());
        scene.set_scale(Axis::Z, 0.0);
        scene.tick();
        assert_eq!(scene.current_shape().map(|s| s.normal_matrix()), before);
    }

    #[test]
    fn frame_model_view_places_the_shape_in_front_of_the_camera() {
        let mut scene = Scene::new();
        scene.add_shape(ShapeKind::Cube);
        let draws = scene.frame();
        let mv = glam::Mat4::from_cols_array_2d(&draws[0].transform.model_view);
        let p = mv * Vec4::new(0.0, 0.0, 0.0, 1.0);
        // The default camera sits at z = 6 looking at the origin.
        assert!((p.z - -6.0).abs() < 1e-4);
    }

    #[test]
    fn axis_lines_span_the_world_axes() {
        let scene = Scene::new();
        let axes = scene.axis_lines();
        assert_eq!(axes[0].start, Vec3::new(-100.0, 0.0, 0.0));
        assert_eq!(axes[1].end, Vec3::new(0.0, 100.0, 0.0));
        assert_eq!(axes[2].color, [0.0, 0.0, 1.0, 0.8]);
    }
}
