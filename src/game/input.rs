//! Window input translated into game events
//!
//! The window layer pushes [`GameInput`] values as winit delivers events; the
//! controller drains the queue once per frame.

use std::collections::VecDeque;

use winit::{event::ElementState, keyboard::KeyCode};

use crate::gfx::camera::MoveDirection;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    Move { direction: MoveDirection, pressed: bool },
    /// Raw mouse delta in pixels
    Look { dx: f64, dy: f64 },
    /// Primary button pressed
    Interact,
    /// Window lost focus; held keys will never report release
    FocusLost,
    Exit,
}

impl GameInput {
    /// Maps a physical key transition to a game event, if the key is bound
    pub fn from_key(key: KeyCode, state: ElementState) -> Option<Self> {
        let pressed = state == ElementState::Pressed;
        let direction = match key {
            KeyCode::KeyW => MoveDirection::Forward,
            KeyCode::KeyS => MoveDirection::Backward,
            KeyCode::KeyA => MoveDirection::Left,
            KeyCode::KeyD => MoveDirection::Right,
            KeyCode::Escape if pressed => return Some(GameInput::Exit),
            _ => return None,
        };
        Some(GameInput::Move { direction, pressed })
    }
}

#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<GameInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: GameInput) {
        self.events.push_back(input);
    }

    /// Removes and yields all queued events in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = GameInput> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
