//! # Graphics Module
//!
//! Everything between the game state and the GPU:
//!
//! - **Camera** ([`camera`]) - first-person camera and its controller
//! - **Geometry** ([`geometry`]) - bounding boxes
//! - **Scene** ([`scene`]) - mesh storage and OBJ loading
//! - **Resources** ([`resources`]) - global uniforms, lighting and depth buffer
//! - **Rendering** ([`rendering`]) - surface, pipeline and frame submission

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::FpsCamera;
pub use rendering::render_engine::RenderEngine;
