//! # User Interface Module
//!
//! Dear ImGui overlay for the in-game HUD.
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`hud`] - HUD layout (pure, testable) and drawing

pub mod hud;
pub mod manager;

// Re-export main types
pub use hud::{build_hud, HudLine};
pub use manager::UiManager;
