use cgmath::{Matrix4, SquareMatrix};
use wgpu::Device;

use crate::{gfx::geometry::AABB, wgpu_utils::binding_types};

use super::vertex::Vertex3D;

/// Indexed triangle mesh with CPU copies of its data and lazily created GPU buffers
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    /// Builds a mesh from flat tobj-style buffers.
    ///
    /// Missing or mismatched normals fall back to the up-vector.
    pub fn new(positions: &[f32], normals: &[f32], indices: Vec<u32>) -> Self {
        Self {
            vertices: Vertex3D::interleave(positions, normals),
            index_count: indices.len() as u32,
            indices,
            vertex_buffer: None,
            index_buffer: None,
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    fn init_gpu_buffers(&mut self, device: &Device) {
        use wgpu::util::DeviceExt;

        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

/// Per-object uniform buffer holding the model matrix, and its bind group
pub struct ObjectGpuResources {
    pub transform_buffer: wgpu::Buffer,
    pub transform_bind_group: wgpu::BindGroup,
}

/// Layout of the per-object transform bind group (group 1 of the scene pipeline)
pub fn transform_bind_group_layout(device: &Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Transform Bind Group Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: binding_types::uniform(),
            count: None,
        }],
    })
}

/// A named mesh of the level.
///
/// The bounding box is computed once from the raw vertex positions and never
/// follows the transform; animated objects keep the box of their rest pose.
pub struct SceneObject {
    pub name: String,
    pub mesh: Mesh,
    pub bounds: AABB,
    pub transform: Matrix4<f32>,
    pub gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl SceneObject {
    /// Create a new object with identity transformation
    pub fn new(name: impl Into<String>, positions: &[f32], normals: &[f32], indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            mesh: Mesh::new(positions, normals, indices),
            bounds: AABB::from_positions(positions),
            transform: Matrix4::identity(),
            gpu_resources: None,
        }
    }

    /// Uploads the mesh and creates the transform uniform
    pub fn init_gpu_resources(&mut self, device: &Device, layout: &wgpu::BindGroupLayout) {
        use wgpu::util::DeviceExt;

        self.mesh.init_gpu_buffers(device);

        // cgmath matrices are already column-major for GPU
        let transform_data: &[f32; 16] = self.transform.as_ref();
        let transform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Transform Uniform Buffer"),
            contents: bytemuck::cast_slice(transform_data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Transform Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.as_entire_binding(),
            }],
        });

        self.gpu_resources = Some(ObjectGpuResources {
            transform_buffer,
            transform_bind_group,
        });
    }

    /// Sync the transformation matrix to the GPU if resources exist
    pub fn update_transform(&self, queue: &wgpu::Queue) {
        if let Some(gpu_resources) = &self.gpu_resources {
            let transform_data: &[f32; 16] = self.transform.as_ref();
            queue.write_buffer(
                &gpu_resources.transform_buffer,
                0,
                bytemuck::cast_slice(transform_data),
            );
        }
    }

    pub fn get_transform_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources
            .as_ref()
            .map(|res| &res.transform_bind_group)
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_object(&mut self, object: &'a SceneObject);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer)
        else {
            return; // Skip drawing if not uploaded
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    fn draw_object(&mut self, object: &'b SceneObject) {
        let Some(bind_group) = object.get_transform_bind_group() else {
            return;
        };
        self.set_bind_group(1, bind_group, &[]);
        self.draw_mesh(&object.mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_object_bounds_and_identity_transform() {
        let positions = [0.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.0, 1.0, 4.0];
        let object = SceneObject::new("Paredes", &positions, &[], vec![0, 1, 2]);

        assert_eq!(object.name, "Paredes");
        assert_eq!(object.mesh.vertex_count(), 3);
        assert_eq!(object.mesh.index_count(), 3);
        assert_eq!(object.bounds.min, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(object.bounds.max, Vector3::new(2.0, 1.0, 4.0));
        assert_eq!(object.transform, Matrix4::identity());
        assert!(object.gpu_resources.is_none());
    }
}
