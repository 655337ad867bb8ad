use glam::Vec2;

/// Axis-aligned box in the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }

    /// Touching edges count as overlap.
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.max.x >= other.min.x
            && other.max.x >= self.min.x
            && self.max.y >= other.min.y
            && other.max.y >= self.min.y
    }
}
