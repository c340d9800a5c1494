//! # Scene Module
//!
//! Storage for the level's meshes.
//!
//! - [`Scene`] - arena of [`SceneObject`]s keyed by name, addressed by [`ObjectId`]
//! - [`SceneObject`] - a named mesh with its bounding box, transform and GPU resources
//! - [`Vertex3D`] - interleaved position/normal vertex
//! - [`loader`] - builds a [`Scene`] from a wavefront OBJ file

pub mod loader;
pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use loader::{load_scene, load_scene_from_reader};
pub use object::{DrawObject, Mesh, SceneObject};
pub use scene::{ObjectId, Scene};
pub use vertex::Vertex3D;
