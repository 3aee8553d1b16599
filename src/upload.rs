//! GPU-side mesh buffers and the uniform block layouts.
//!
//! [`Mesh`] is the uploaded form of a [`MeshData`]: vertex buffer, optional
//! color and index buffers, and the counts a draw call needs. The uniform
//! structs mirror the shader blocks byte for byte; everything here is
//! `#[repr(C)]` + `bytemuck` so a `&[T]` casts straight to `&[u8]`.

use glam::{Mat3, Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::gpu::GpuContext;
use crate::mesh::{DrawMode, MeshData, Vertex3d};

/// Mesh buffers resident on the GPU.
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    /// Per-vertex RGBA colors; absent when the mesh has no color attribute.
    pub color_buffer: Option<wgpu::Buffer>,
    /// 16-bit indices; absent for unindexed triangle lists.
    pub index_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
    pub draw_mode: DrawMode,
}

impl Mesh {
    /// Uploads `data` into device-local buffers.
    pub fn from_data(gpu: &GpuContext, data: &MeshData) -> Self {
        let vertex_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let color_buffer = (!data.colors.is_empty()).then(|| {
            gpu.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Mesh Color Buffer"),
                    contents: bytemuck::cast_slice(&data.colors),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let index_buffer = (!data.indices.is_empty()).then(|| {
            gpu.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Mesh Index Buffer"),
                    contents: bytemuck::cast_slice(&data.indices),
                    usage: wgpu::BufferUsages::INDEX,
                })
        });

        Self {
            vertex_buffer,
            color_buffer,
            index_buffer,
            vertex_count: data.vertices.len() as u32,
            index_count: data.indices.len() as u32,
            draw_mode: data.draw_mode(),
        }
    }

    /// Vertex attribute layout for [`Vertex3d`] buffers.
    pub const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = Vertex3d::LAYOUT;
}

/// Packs a 3×3 matrix as three vec4 columns, matching std140 alignment.
fn mat3_padded(m: Mat3) -> [[f32; 4]; 3] {
    [
        m.x_axis.extend(0.0).to_array(),
        m.y_axis.extend(0.0).to_array(),
        m.z_axis.extend(0.0).to_array(),
    ]
}

/// Per-shape transform uniforms. 192 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 3],
    pub eye: [f32; 3],
    pub shininess: f32,
}

impl ShapeUniforms {
    pub fn new(model_view: Mat4, projection: Mat4, normal: Mat3, eye: Vec3, shininess: f32) -> Self {
        Self {
            model_view: model_view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            normal_matrix: mat3_padded(normal),
            eye: eye.to_array(),
            shininess,
        }
    }
}

/// Lighting products and positions for the two scene lights. 128 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniforms {
    pub ambient_directional: [f32; 4],
    pub diffuse_directional: [f32; 4],
    pub specular_directional: [f32; 4],
    pub ambient_positional: [f32; 4],
    pub diffuse_positional: [f32; 4],
    pub specular_positional: [f32; 4],
    pub directional_position: [f32; 4],
    pub positional_position: [f32; 4],
}

impl LightingUniforms {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ambient_directional: Vec4,
        diffuse_directional: Vec4,
        specular_directional: Vec4,
        ambient_positional: Vec4,
        diffuse_positional: Vec4,
        specular_positional: Vec4,
        directional_position: Vec4,
        positional_position: Vec4,
    ) -> Self {
        Self {
            ambient_directional: ambient_directional.to_array(),
            diffuse_directional: diffuse_directional.to_array(),
            specular_directional: specular_directional.to_array(),
            ambient_positional: ambient_positional.to_array(),
            diffuse_positional: diffuse_positional.to_array(),
            specular_positional: specular_positional.to_array(),
            directional_position: directional_position.to_array(),
            positional_position: positional_position.to_array(),
        }
    }
}
