// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner
/// points. Used as a conservative broad-phase filter: intersection may
/// report false positives but never false negatives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Returns true if two boxes overlap on both axes. Intervals are
    /// closed, so boxes that merely touch count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Creates the tight bounding box of a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for point in points.iter().skip(1) {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }
        Some(Self { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f64, y: f64) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(x + 1.0, y + 1.0))
    }

    #[test]
    fn test_aabb_intersects_overlap() {
        let a = unit_box_at(0.0, 0.0);
        let b = unit_box_at(0.5, 0.5);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_aabb_intersects_touching() {
        // Closed intervals: shared edges and corners count
        let a = unit_box_at(0.0, 0.0);
        let edge = unit_box_at(1.0, 0.0);
        let corner = unit_box_at(1.0, 1.0);
        assert!(a.intersects(&edge));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_aabb_intersects_disjoint() {
        let a = unit_box_at(0.0, 0.0);
        assert!(!a.intersects(&unit_box_at(1.5, 0.0)));
        assert!(!a.intersects(&unit_box_at(0.0, -2.0)));
    }

    #[test]
    fn test_aabb_intersects_symmetric_and_reflexive() {
        let a = unit_box_at(0.0, 0.0);
        let b = unit_box_at(0.75, -0.25);
        let c = unit_box_at(5.0, 5.0);
        assert!(a.intersects(&a));
        assert_eq!(a.intersects(&b), b.intersects(&a));
        assert_eq!(a.intersects(&c), c.intersects(&a));
    }

    #[test]
    fn test_aabb_from_points() {
        let points = [
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.0, 0.5),
            Vec2::new(2.0, -1.0),
        ];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_eq!(aabb.min, Vec2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(2.0, 2.0));
        assert!(Aabb::from_points(&[]).is_none());
    }
}
