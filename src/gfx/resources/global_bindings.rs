//! Global uniform bindings for camera and lighting
//!
//! One uniform buffer, bound at group 0 of the scene pipeline, carries the
//! camera, the base object color, the directional light and the single chest
//! point light.

use crate::{
    config::LightingConfig,
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Global uniform buffer content structure
///
/// MUST match the `Globals` struct in `scene.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],

    object_color: [f32; 4],
    sun_direction: [f32; 4],
    sun_color: [f32; 4],

    // xyz = position, w = intensity (0 disables the light)
    point_light: [f32; 4],
    point_color: [f32; 4],
    // constant, linear, quadratic, unused
    point_attenuation: [f32; 4],
}
// Total: 16 + 64 + 6 * 16 = 176 bytes

/// A point light in world space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Everything the shader needs to light one frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneLighting {
    pub object_color: [f32; 3],
    pub sun_direction: [f32; 3],
    pub sun_color: [f32; 3],
    pub chest_light: Option<PointLight>,
    pub chest_attenuation: [f32; 3],
}

impl SceneLighting {
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            object_color: config.object_color,
            sun_direction: config.sun_direction,
            sun_color: config.sun_color,
            chest_light: None,
            chest_attenuation: config.chest_attenuation,
        }
    }

    pub fn with_chest_light(mut self, light: Option<PointLight>) -> Self {
        self.chest_light = light;
        self
    }
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self::from_config(&LightingConfig::default())
    }
}

impl GlobalUBOContent {
    pub fn new(camera: CameraUniform, lighting: &SceneLighting) -> Self {
        let extend = |v: [f32; 3], w: f32| [v[0], v[1], v[2], w];
        let (point_light, point_color) = match lighting.chest_light {
            Some(light) => (
                extend(light.position, light.intensity),
                extend(light.color, 1.0),
            ),
            None => ([0.0; 4], [0.0; 4]),
        };

        Self {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            object_color: extend(lighting.object_color, 1.0),
            sun_direction: extend(lighting.sun_direction, 0.0),
            sun_color: extend(lighting.sun_color, 1.0),
            point_light,
            point_color,
            point_attenuation: extend(lighting.chest_attenuation, 0.0),
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Writes this frame's camera and lighting into the global uniform buffer.
///
/// Unchanged content is not re-uploaded.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    lighting: &SceneLighting,
) {
    ubo.update_content(queue, GlobalUBOContent::new(camera, lighting));
}

/// Bind group layout and bind group for the global uniforms (group 0)
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: binding_types::uniform(),
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self {
            bind_group_layout,
            bind_group,
        }
    }

    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_size_matches_shader() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 176);
    }

    #[test]
    fn test_missing_chest_light_has_zero_intensity() {
        let content = GlobalUBOContent::new(CameraUniform::default(), &SceneLighting::default());
        assert_eq!(content.point_light[3], 0.0);
        assert_eq!(content.object_color, [0.6, 0.5, 0.4, 1.0]);
        assert_eq!(content.point_attenuation, [1.0, 0.05, 0.01, 0.0]);
    }

    #[test]
    fn test_chest_light_is_packed() {
        let lighting = SceneLighting::default().with_chest_light(Some(PointLight {
            position: [1.0, 2.0, 3.0],
            color: [1.0, 0.85, 0.4],
            intensity: 2.5,
        }));
        let content = GlobalUBOContent::new(CameraUniform::default(), &lighting);

        assert_eq!(content.point_light, [1.0, 2.0, 3.0, 2.5]);
        assert_eq!(content.point_color, [1.0, 0.85, 0.4, 1.0]);
    }
}
