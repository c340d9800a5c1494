use cgmath::{Vector3, Zero};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Component-wise min/max over a flat `[x, y, z, x, y, z, ...]` buffer.
    ///
    /// An empty buffer yields a degenerate box at the origin.
    pub fn from_positions(positions: &[f32]) -> Self {
        let mut points = positions
            .chunks_exact(3)
            .map(|p| Vector3::new(p[0], p[1], p[2]));

        let Some(first) = points.next() else {
            return Self::new(Vector3::zero(), Vector3::zero());
        };

        let (min, max) = points.fold((first, first), |(min, max), v| {
            (
                Vector3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z)),
                Vector3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z)),
            )
        });

        Self::new(min, max)
    }

    /// Midpoint of the box
    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_positions() {
        let positions = [0.0, 0.0, 0.0, 1.0, 2.0, 1.0, -1.0, -1.0, 3.0];
        let aabb = AABB::from_positions(&positions);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.center(), Vector3::new(0.0, 0.5, 1.5));
    }

    #[test]
    fn test_empty_positions_give_zero_box() {
        let aabb = AABB::from_positions(&[]);
        assert_eq!(aabb.min, Vector3::zero());
        assert_eq!(aabb.max, Vector3::zero());
        assert_eq!(aabb.center(), Vector3::zero());
    }
}
