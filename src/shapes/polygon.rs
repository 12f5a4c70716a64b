use crate::math::vec2::Vec2;

/// A convex polygon defined by its vertices in local space.
///
/// Vertices must be ordered counter-clockwise and form a simple
/// (non-self-intersecting) polygon; violating either precondition leaves
/// the derived area, centroid, and inertia factor undefined. Convexity is
/// not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    area: f64,
    centroid: Vec2,
    inertia_factor: f64,
}

impl Polygon {
    /// Creates a new polygon from vertices in counter-clockwise order.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");

        // Area and centroid of a simple polygon via the shoelace formula
        // https://en.wikipedia.org/wiki/Polygon#Area_and_centroid
        let n = vertices.len();
        let mut twice_area = 0.0;
        let mut centroid = Vec2::ZERO;

        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let cross = a.cross(b);
            twice_area += cross;
            centroid.x += (a.x + b.x) * cross;
            centroid.y += (a.y + b.y) * cross;
        }

        let signed_area = twice_area * 0.5;
        let centroid = centroid / (6.0 * signed_area);
        let area = signed_area.abs();

        // Mass-normalized moment of inertia about the origin via Green's
        // theorem, shifted to the centroid with the parallel axis theorem.
        let mut inertia_factor = 0.0;
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            inertia_factor += (a.cross(b) * (a.dot(a) + a.dot(b) + b.dot(b))).abs();
        }
        inertia_factor /= 12.0;
        inertia_factor -= area * centroid.dot(centroid);

        Self {
            vertices,
            area,
            centroid,
            inertia_factor,
        }
    }

    /// Vertices in local space, counter-clockwise.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    /// Centroid (center of mass for uniform density) in local space.
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Moment of inertia about the centroid divided by density.
    pub fn inertia_factor(&self) -> f64 {
        self.inertia_factor
    }
}
