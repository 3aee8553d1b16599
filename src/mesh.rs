//! CPU-side mesh data and the vertex format shared with the renderer.
//!
//! [`MeshData`] is the output of every geometry generator: an ordered vertex
//! list with optional parallel per-vertex colors and an optional 16-bit index
//! buffer. All builder helpers keep one winding convention: triangles are
//! counter-clockwise when seen from outside, and the flat normal computed
//! from the edge cross product points outward.
//!
//! [`Vertex3d`] is the interleaved position/normal/uv layout the rendering
//! backend consumes; per-vertex colors travel in a separate buffer so they
//! can be swapped for uniform white when color display is toggled off.

use glam::Vec3;

/// A vertex with position, normal, and texture coordinates.
///
/// `#[repr(C)]` with `bytemuck` derives so vertex slices can be cast
/// directly to bytes for GPU upload. 32 bytes per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3d {
    /// Model-space position; the shader convention appends w = 1.
    pub position: [f32; 3],
    /// Surface normal, normalized (or zero for degenerate triangles).
    pub normal: [f32; 3],
    /// Texture coordinates in `[0, 1]`; (0, 0) for untextured shapes.
    pub uv: [f32; 2],
}

impl Vertex3d {
    /// Vertex buffer layout: position (loc 0), normal (loc 1), uv (loc 2).
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex3d>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 24,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };

    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// How a mesh's triangles are assembled by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Every three consecutive vertices form a triangle.
    TriangleList,
    /// Triangles are assembled from the 16-bit index buffer.
    IndexedTriangleList,
}

/// Mesh geometry before GPU upload.
///
/// Parallel-array invariants: `colors` is either empty or exactly one entry
/// per vertex; every index is in bounds. The builder helpers uphold both;
/// [`MeshData::validate`] checks them for hand-assembled data.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex3d>,
    /// Optional per-vertex RGBA colors; empty means "no color attribute".
    pub colors: Vec<[f32; 4]>,
    /// Optional index buffer; empty means an unindexed triangle list.
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_mode(&self) -> DrawMode {
        if self.indices.is_empty() {
            DrawMode::TriangleList
        } else {
            DrawMode::IndexedTriangleList
        }
    }

    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.vertices.len() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Appends one triangle with a flat normal from the edge cross product.
    ///
    /// With counter-clockwise winding (seen from outside) the normal
    /// `(b - a) × (c - a)` points outward. A degenerate triangle gets a zero
    /// normal rather than NaN.
    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(c - a).normalize_or_zero().to_array();
        for p in [a, b, c] {
            self.vertices
                .push(Vertex3d::new(p.to_array(), normal, [0.0, 0.0]));
        }
    }

    /// Appends a quad as two triangles sharing the `a`-`c` diagonal.
    pub fn push_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }

    /// Appends a triangle fan connecting consecutive ring points to `center`.
    ///
    /// The ring is treated as closed (last point connects back to the
    /// first). Ring orientation decides which way the cap faces; callers
    /// order the ring so the fan normal points outward.
    pub fn push_fan(&mut self, ring: &[Vec3], center: Vec3) {
        for i in 0..ring.len() {
            let next = (i + 1) % ring.len();
            self.push_triangle(ring[i], ring[next], center);
        }
    }

    /// Assigns one random opaque color per triangle (all three vertices
    /// share it), replacing any existing color attribute.
    pub fn color_per_triangle(&mut self) {
        self.colors.clear();
        if self.indices.is_empty() {
            for _ in 0..self.triangle_count() {
                let c = crate::color::Color::random().to_array();
                self.colors.extend([c, c, c]);
            }
        } else {
            // Indexed meshes share vertices between triangles, so colors are
            // per vertex instead.
            self.colors.extend(
                (0..self.vertices.len()).map(|_| crate::color::Color::random().to_array()),
            );
        }
    }

    /// Flat per-vertex positions, for backends that consume deinterleaved
    /// buffers instead of the interleaved [`Vertex3d`] layout.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Flat per-vertex normals, parallel to [`MeshData::positions`].
    pub fn normals(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.normal).collect()
    }

    /// Flat per-vertex texture coordinates, parallel to
    /// [`MeshData::positions`].
    pub fn uvs(&self) -> Vec<[f32; 2]> {
        self.vertices.iter().map(|v| v.uv).collect()
    }

    /// Resolves indices (if any) and yields each triangle's corner positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        let unindexed = self.indices.is_empty();
        (0..self.triangle_count()).map(move |t| {
            let corner = |k: usize| {
                let v = if unindexed {
                    t * 3 + k
                } else {
                    self.indices[t * 3 + k] as usize
                };
                Vec3::from(self.vertices[v].position)
            };
            [corner(0), corner(1), corner(2)]
        })
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for v in &self.vertices {
            let p = Vec3::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Center of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }

    /// Checks the parallel-array and index-bounds invariants.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.colors.is_empty() && self.colors.len() != self.vertices.len() {
            return Err(MeshError::ColorCountMismatch {
                vertices: self.vertices.len(),
                colors: self.colors.len(),
            });
        }
        if self.indices.is_empty() {
            if self.vertices.len() % 3 != 0 {
                return Err(MeshError::PartialTriangle(self.vertices.len()));
            }
        } else {
            if self.indices.len() % 3 != 0 {
                return Err(MeshError::PartialTriangle(self.indices.len()));
            }
            for &i in &self.indices {
                if i as usize >= self.vertices.len() {
                    return Err(MeshError::IndexOutOfBounds {
                        index: i,
                        vertices: self.vertices.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Violations of the mesh parallel-array invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    ColorCountMismatch { vertices: usize, colors: usize },
    IndexOutOfBounds { index: u16, vertices: usize },
    /// Vertex or index count is not a multiple of three.
    PartialTriangle(usize),
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::ColorCountMismatch { vertices, colors } => {
                write!(f, "{} colors for {} vertices", colors, vertices)
            }
            MeshError::IndexOutOfBounds { index, vertices } => {
                write!(f, "index {} out of bounds for {} vertices", index, vertices)
            }
            MeshError::PartialTriangle(n) => {
                write!(f, "{} entries do not form whole triangles", n)
            }
        }
    }
}

impl std::error::Error for MeshError {}
