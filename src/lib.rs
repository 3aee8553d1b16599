//! # Tessella
//!
//! **Procedural meshes and an editable shape/light/camera scene.**
//!
//! Generate solids (cones, cylinders, subdivided spheres, cubes), place them
//! in a scene with two orbiting lights and an orthographic orbit camera, and
//! pull ready-to-upload vertex and uniform data every frame. 2D
//! recursive-subdivision patterns are included for flat demos.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tessella::*;
//!
//! fn main() {
//!     let mut scene = Scene::new();
//!     scene.add_shape(ShapeKind::Sphere);
//!     scene.set_rotation(Axis::Y, 45.0);
//!
//!     // Once per frame:
//!     scene.tick();
//!     for draw in scene.frame() {
//!         // draw.shape.mesh holds the vertex data,
//!         // draw.transform / draw.lighting the uniform blocks.
//!     }
//! }
//! ```
//!
//! Mesh generation and scene state are plain CPU data; [`GpuContext`] and
//! [`upload::Mesh`] cover the wgpu upload step for frontends that want it.

mod camera;
mod color;
mod gpu;
mod light;
mod math;
mod mesh;
mod patterns;
mod scene;
mod shape;
mod solids;
pub mod upload;

pub use camera::OrbitCamera;
pub use color::{Color, ColorParseError};
pub use gpu::{GpuContext, GpuError};
pub use light::{Light, LightKind};
pub use math::{compose_model, normal_matrix, rotation_xyz_degrees, wrap_angle};
pub use mesh::{DrawMode, MeshData, MeshError, Vertex3d};
pub use patterns::{PatternKind, points as pattern_points};
pub use scene::{AxisLine, LightId, MaterialChannel, MAX_SHAPES, Scene, ShapeDraw};
pub use shape::{Axis, ShapeInstance, ShapeKind};
pub use solids::{cone, cube, cylinder, icosphere, uv_sphere};

// Re-export glam math types for convenience
pub use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
