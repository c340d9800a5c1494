// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Global uniforms, lighting data and the depth buffer.

pub mod global_bindings;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{
    update_global_ubo, GlobalBindings, GlobalUBO, GlobalUBOContent, PointLight, SceneLighting,
};
pub use texture_resource::TextureResource;
