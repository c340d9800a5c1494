//! Player-versus-level collision
//!
//! The player is a vertical cylinder of fixed radius. It is blocked by a
//! collider when its radius-expanded footprint overlaps the collider's box on
//! X and Z while its height lies strictly inside the box's Y range. There is
//! no push-out: a blocked move is simply rejected.

use cgmath::Vector3;

use crate::gfx::{
    geometry::AABB,
    scene::{ObjectId, Scene},
};

#[derive(Debug, Clone, Copy)]
pub struct CollisionChecker {
    pub radius: f32,
}

impl CollisionChecker {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Whether a cylinder at `candidate` intersects `bounds`
    pub fn overlaps(&self, candidate: Vector3<f32>, bounds: &AABB) -> bool {
        let r = self.radius;
        candidate.x + r > bounds.min.x
            && candidate.x - r < bounds.max.x
            && candidate.y > bounds.min.y
            && candidate.y < bounds.max.y
            && candidate.z + r > bounds.min.z
            && candidate.z - r < bounds.max.z
    }

    pub fn would_collide(&self, scene: &Scene, colliders: &[ObjectId], candidate: Vector3<f32>) -> bool {
        colliders
            .iter()
            .any(|&id| self.overlaps(candidate, &scene.get(id).bounds))
    }

    /// Applies `displacement` to `position` one horizontal axis at a time.
    ///
    /// X is tried first, then Z from the possibly updated position, so a
    /// diagonal move into a wall still slides along it.
    pub fn slide(
        &self,
        scene: &Scene,
        colliders: &[ObjectId],
        position: Vector3<f32>,
        displacement: Vector3<f32>,
    ) -> Vector3<f32> {
        let mut resolved = position;

        let along_x = Vector3::new(resolved.x + displacement.x, resolved.y, resolved.z);
        if !self.would_collide(scene, colliders, along_x) {
            resolved = along_x;
        }

        let along_z = Vector3::new(resolved.x, resolved.y, resolved.z + displacement.z);
        if !self.would_collide(scene, colliders, along_z) {
            resolved = along_z;
        }

        resolved
    }
}
