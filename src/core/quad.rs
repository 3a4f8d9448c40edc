//! Full-screen quad geometry.
//!
//! Two triangles covering clip space, each vertex carrying a position and a
//! texture coordinate. Texture `v = 0` maps to the top of the screen so the
//! first row of a pixel buffer is drawn at the top.

/// Interleaved quad vertex
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 20 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            tex_coords: [u, v],
        }
    }

    /// Vertex buffer layout matching `vs_main`
    ///
    /// - `location = 0`: position (vec3<f32>)
    /// - `location = 1`: tex_coords (vec2<f32>)
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Two triangles, counter-clockwise, covering the whole viewport
pub const QUAD_VERTICES: [Vertex; 6] = [
    Vertex::new(-1.0, 1.0, 0.0, 0.0),
    Vertex::new(-1.0, -1.0, 0.0, 1.0),
    Vertex::new(1.0, -1.0, 1.0, 1.0),
    Vertex::new(-1.0, 1.0, 0.0, 0.0),
    Vertex::new(1.0, -1.0, 1.0, 1.0),
    Vertex::new(1.0, 1.0, 1.0, 0.0),
];
