use cgmath::{Matrix4, SquareMatrix};

use super::{camera_controller::CameraController, fps_camera::FpsCamera};

pub struct CameraManager {
    pub camera: FpsCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: FpsCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Applies a raw mouse delta to the camera orientation
    pub fn process_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.controller
            .process_mouse_motion(dx, dy, &mut self.camera);
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}
