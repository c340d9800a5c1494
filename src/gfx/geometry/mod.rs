//! Geometric primitives shared by collision, interaction and lighting

pub mod aabb;

pub use aabb::AABB;
