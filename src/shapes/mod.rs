pub mod circle;
pub mod polygon;

// Re-export the specific shape types
pub use circle::Circle;
pub use polygon::Polygon;

use crate::math::vec2::Vec2;

/// Enum representing the geometric shape of a rigid body.
///
/// Shapes are immutable after construction: area, centroid, and inertia
/// factor are derived once and never change.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    /// Creates a polygon shape from vertices given in counter-clockwise
    /// order around the local origin.
    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Shape::Polygon(Polygon::new(vertices))
    }

    /// Creates a rectangle of the given dimensions centered locally
    /// around the point (0, 0).
    pub fn rect(width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Shape::Polygon(Polygon::new(vec![
            Vec2::new(-half_w, half_h),
            Vec2::new(-half_w, -half_h),
            Vec2::new(half_w, -half_h),
            Vec2::new(half_w, half_h),
        ]))
    }

    /// Creates a circle of the given radius centered locally around the
    /// point (0, 0).
    pub fn circle(radius: f64) -> Self {
        Shape::Circle(Circle::new(radius))
    }

    /// Area of the shape.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Polygon(polygon) => polygon.area(),
            Shape::Circle(circle) => circle.area(),
        }
    }

    /// Centroid of the shape in local space.
    pub fn centroid(&self) -> Vec2 {
        match self {
            Shape::Polygon(polygon) => polygon.centroid(),
            Shape::Circle(_) => Vec2::ZERO,
        }
    }

    /// Mass-normalized moment of inertia about the centroid; multiply by
    /// density to get the moment of inertia.
    pub fn inertia_factor(&self) -> f64 {
        match self {
            Shape::Polygon(polygon) => polygon.inertia_factor(),
            Shape::Circle(circle) => circle.inertia_factor(),
        }
    }
}
