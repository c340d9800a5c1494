//! # Vertex Data Structures
//!
//! GPU-compatible vertex format shared by the level meshes and the scene
//! pipeline.

/// A 3D vertex with position and normal data.
///
/// `#[repr(C)]` keeps the layout stable for upload through `bytemuck`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

impl Vertex3D {
    /// Normal assigned to vertices of meshes that carry none.
    pub const UP: [f32; 3] = [0.0, 1.0, 0.0];

    /// Interleaves flat position and normal buffers.
    ///
    /// When `normals` does not provide one normal per position, every vertex
    /// gets [`Vertex3D::UP`] instead.
    pub fn interleave(positions: &[f32], normals: &[f32]) -> Vec<Vertex3D> {
        let has_normals = !normals.is_empty() && normals.len() == positions.len();
        if !has_normals && !normals.is_empty() {
            log::debug!(
                "Normal count {} does not match position count {}, using up-vector",
                normals.len() / 3,
                positions.len() / 3
            );
        }

        positions
            .chunks_exact(3)
            .enumerate()
            .map(|(i, p)| Vertex3D {
                position: [p[0], p[1], p[2]],
                normal: if has_normals {
                    [normals[i * 3], normals[i * 3 + 1], normals[i * 3 + 2]]
                } else {
                    Self::UP
                },
            })
            .collect()
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3) at shader location 0
    /// - Attribute 1: Normal (Float32x3) at shader location 1
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
