use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use crate::config::PlayerConfig;
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// First-person camera driven by yaw and pitch in degrees.
///
/// `front` is always the unit look direction derived from the angles.
#[derive(Debug, Clone, Copy)]
pub struct FpsCamera {
    pub position: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    pub pitch_limit: f32,
    pub front: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for FpsCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.position);
        let view = Matrix4::look_at_rh(eye, eye + self.front, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl FpsCamera {
    pub fn new(player: &PlayerConfig, aspect: f32) -> Self {
        let mut camera = Self {
            position: player.start_position,
            yaw: player.start_yaw,
            pitch: 0.0,
            pitch_limit: player.pitch_limit,
            front: -Vector3::unit_z(), // Recomputed below from yaw/pitch.
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(player.fov_y),
            znear: player.z_near,
            zfar: player.z_far,
            uniform: CameraUniform::default(),
        };
        camera.set_pitch(player.start_pitch);
        camera
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.yaw += delta;
        self.update();
    }

    /// Horizontal-ish right vector, perpendicular to `front` and `up`
    pub fn right(&self) -> Vector3<f32> {
        self.front.cross(self.up).normalize()
    }

    /// Recomputes `front` after changing `yaw` or `pitch`.
    fn update(&mut self) {
        self.front = calculate_front(self.yaw, self.pitch);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.position.x, self.position.y, self.position.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

fn calculate_front(yaw: f32, pitch: f32) -> Vector3<f32> {
    let (yaw, pitch) = (Deg(yaw), Deg(pitch));
    Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}
