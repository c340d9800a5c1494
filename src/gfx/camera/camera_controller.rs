use cgmath::{InnerSpace, Vector3, Zero};

use crate::config::PlayerConfig;

use super::fps_camera::FpsCamera;

/// Movement key held by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Turns held movement keys and mouse deltas into camera motion.
pub struct CameraController {
    pub move_speed: f32,
    pub sensitivity: f32,
    is_forward_pressed: bool,
    is_backward_pressed: bool,
    is_left_pressed: bool,
    is_right_pressed: bool,
}

impl CameraController {
    pub fn new(move_speed: f32, sensitivity: f32) -> Self {
        Self {
            move_speed,
            sensitivity,
            is_forward_pressed: false,
            is_backward_pressed: false,
            is_left_pressed: false,
            is_right_pressed: false,
        }
    }

    pub fn from_config(player: &PlayerConfig) -> Self {
        Self::new(player.move_speed, player.mouse_sensitivity)
    }

    pub fn set_direction(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Forward => self.is_forward_pressed = pressed,
            MoveDirection::Backward => self.is_backward_pressed = pressed,
            MoveDirection::Left => self.is_left_pressed = pressed,
            MoveDirection::Right => self.is_right_pressed = pressed,
        }
    }

    /// Releases every movement key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.is_forward_pressed = false;
        self.is_backward_pressed = false;
        self.is_left_pressed = false;
        self.is_right_pressed = false;
    }

    /// Horizontal displacement for this frame.
    ///
    /// Held directions are summed, flattened onto the XZ plane, normalized and
    /// scaled by `move_speed * dt`. Opposing keys cancel out to zero.
    pub fn displacement(&self, camera: &FpsCamera, dt: f32) -> Vector3<f32> {
        let mut direction = Vector3::zero();
        if self.is_forward_pressed {
            direction += camera.front;
        }
        if self.is_backward_pressed {
            direction -= camera.front;
        }
        if self.is_left_pressed {
            direction -= camera.right();
        }
        if self.is_right_pressed {
            direction += camera.right();
        }
        direction.y = 0.0;

        if direction.magnitude2() > 0.0 {
            direction.normalize() * self.move_speed * dt
        } else {
            Vector3::zero()
        }
    }

    /// Mouse right/down turns the view right/down
    pub fn process_mouse_motion(&mut self, dx: f64, dy: f64, camera: &mut FpsCamera) {
        camera.add_yaw(dx as f32 * self.sensitivity);
        camera.add_pitch(-dy as f32 * self.sensitivity);
    }
}
