// src/lib.rs
//! Labyrinth
//!
//! A first-person maze game on wgpu and winit: walk the level, open chests
//! to unlock the portal, then step through it.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod gfx;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::GameApp;
pub use config::GameConfig;
pub use game::GameController;
