//! Narrow-phase collision detection via the Separating Axis Theorem.
//!
//! Each routine either finds a separating axis and reports no collision,
//! or returns the axis of minimum overlap as the contact normal together
//! with the penetration depth and world-space contact points.

use crate::math::vec2::{self, Vec2};
use crate::objects::rigid_body::RigidBody;
use crate::shapes::Shape;
use crate::world::BodyHandle;

use super::manifold::ContactManifold;

/// Normal, depth, and contact points before the owning bodies are known.
struct Contact {
    normal: Vec2,
    depth: f64,
    points: Vec<Vec2>,
}

struct Projection {
    min: f64,
    max: f64,
}

/// Interval overlap with touching counted as separated: a projection gap
/// on any axis proves the shapes disjoint.
fn projections_overlap(a: &Projection, b: &Projection) -> bool {
    !(b.max <= a.min || a.max <= b.min)
}

/// Unit normal of the edge from `current` to `next`. The sign along the
/// axis is irrelevant to the projection tests; resolution re-orients the
/// winning axis later.
fn edge_axis(current: Vec2, next: Vec2) -> Vec2 {
    (next - current).perp().normalize()
}

fn project_vertices(vertices: &[Vec2], axis: Vec2) -> Projection {
    let mut projection = Projection {
        min: f64::MAX,
        max: f64::MIN,
    };

    for vertex in vertices {
        let dot = vertex.dot(axis);
        projection.min = projection.min.min(dot);
        projection.max = projection.max.max(dot);
    }

    projection
}

fn project_circle(center: Vec2, radius: f64, axis: Vec2) -> Projection {
    let center_dot = center.dot(axis);
    Projection {
        min: center_dot - radius,
        max: center_dot + radius,
    }
}

struct SegmentPoint {
    distance_squared: f64,
    point: Vec2,
}

/// Closest point on the segment [vertex_a, vertex_b] to `point`, found by
/// clamped projection onto the segment.
fn closest_point_on_segment(point: Vec2, vertex_a: Vec2, vertex_b: Vec2) -> SegmentPoint {
    let segment = vertex_b - vertex_a;
    let offset = point - vertex_a;

    let projection = segment.dot(offset);
    let length_squared = segment.dot(segment);

    let closest = if projection <= 0.0 {
        vertex_a
    } else if projection >= length_squared {
        vertex_b
    } else {
        vertex_a + segment * (projection / length_squared)
    };

    SegmentPoint {
        distance_squared: point.distance_squared(closest),
        point: closest,
    }
}

/// Contact points for a polygon-polygon overlap: the globally closest
/// vertex-to-edge point over both polygons, plus a second point when a
/// tie within epsilon indicates edge-edge contact.
fn polygon_contact_points(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> Vec<Vec2> {
    let mut closest_distance = f64::MAX;
    let mut contact_a = Vec2::ZERO;
    let mut contact_b = Vec2::ZERO;
    let mut num_contacts = 0;

    for (points, edges) in [(vertices_a, vertices_b), (vertices_b, vertices_a)] {
        for &point in points {
            for j in 0..edges.len() {
                let edge_start = edges[j];
                let edge_end = edges[(j + 1) % edges.len()];

                let candidate = closest_point_on_segment(point, edge_start, edge_end);

                if vec2::approx_eq(candidate.distance_squared, closest_distance) {
                    // Ties only compare against the first recorded point
                    if candidate.point.approx_eq(contact_a) {
                        continue;
                    }
                    num_contacts = 2;
                    contact_b = candidate.point;
                } else if candidate.distance_squared < closest_distance {
                    num_contacts = 1;
                    contact_a = candidate.point;
                    closest_distance = candidate.distance_squared;
                }
            }
        }
    }

    let mut points = vec![contact_a];
    if num_contacts == 2 {
        points.push(contact_b);
    }
    points
}

/// SAT test between two polygons given in world space.
fn polygon_polygon(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> Option<Contact> {
    let mut depth = f64::MAX;
    let mut normal = Vec2::ZERO;

    for vertices in [vertices_a, vertices_b] {
        for i in 0..vertices.len() {
            let axis = edge_axis(vertices[i], vertices[(i + 1) % vertices.len()]);

            let projection_a = project_vertices(vertices_a, axis);
            let projection_b = project_vertices(vertices_b, axis);

            if !projections_overlap(&projection_a, &projection_b) {
                return None;
            }

            let axis_depth =
                (projection_b.max - projection_a.min).min(projection_a.max - projection_b.min);

            if axis_depth < depth {
                depth = axis_depth;
                normal = axis;
            }
        }
    }

    Some(Contact {
        normal,
        depth,
        points: polygon_contact_points(vertices_a, vertices_b),
    })
}

/// SAT test between a world-space polygon and a circle. Beyond the
/// polygon's edge normals, one extra axis from the polygon vertex nearest
/// the circle center captures vertex-region collisions.
fn polygon_circle(vertices: &[Vec2], center: Vec2, radius: f64) -> Option<Contact> {
    let mut depth = f64::MAX;
    let mut normal = Vec2::ZERO;

    for i in 0..vertices.len() {
        let axis = edge_axis(vertices[i], vertices[(i + 1) % vertices.len()]);

        let polygon_projection = project_vertices(vertices, axis);
        let circle_projection = project_circle(center, radius, axis);

        if !projections_overlap(&polygon_projection, &circle_projection) {
            return None;
        }

        let axis_depth = (circle_projection.max - polygon_projection.min)
            .min(polygon_projection.max - circle_projection.min);

        if axis_depth < depth {
            depth = axis_depth;
            normal = axis;
        }
    }

    let mut closest_distance = f64::MAX;
    let mut closest_vertex = Vec2::ZERO;
    for &vertex in vertices {
        let distance_squared = vertex.distance_squared(center);
        if distance_squared < closest_distance {
            closest_distance = distance_squared;
            closest_vertex = vertex;
        }
    }

    let axis = (closest_vertex - center).normalize();
    let polygon_projection = project_vertices(vertices, axis);
    let circle_projection = project_circle(center, radius, axis);

    if !projections_overlap(&polygon_projection, &circle_projection) {
        return None;
    }

    let axis_depth = (circle_projection.max - polygon_projection.min)
        .min(polygon_projection.max - circle_projection.min);

    if axis_depth < depth {
        depth = axis_depth;
        normal = axis;
    }

    // Single contact: closest point on the polygon boundary to the center
    let mut contact = SegmentPoint {
        distance_squared: f64::MAX,
        point: Vec2::ZERO,
    };
    for i in 0..vertices.len() {
        let candidate =
            closest_point_on_segment(center, vertices[i], vertices[(i + 1) % vertices.len()]);
        if candidate.distance_squared < contact.distance_squared {
            contact = candidate;
        }
    }

    Some(Contact {
        normal,
        depth,
        points: vec![contact.point],
    })
}

/// Circle-circle test: collision iff the center distance does not exceed
/// the radii sum. Touching counts as colliding with zero depth.
fn circle_circle(
    center_a: Vec2,
    radius_a: f64,
    center_b: Vec2,
    radius_b: f64,
) -> Option<Contact> {
    let center_distance = center_a.distance(center_b);
    let combined_radius = radius_a + radius_b;

    if center_distance > combined_radius {
        return None;
    }

    let normal = (center_b - center_a).normalize();
    // Point on the second circle's surface nearest the first center
    let point = center_b - normal * radius_b;

    Some(Contact {
        normal,
        depth: combined_radius - center_distance,
        points: vec![point],
    })
}

/// Tests a pair of bodies for collision, dispatching on their shape
/// kinds. Polygon tests consume the bodies' cached world-space vertices,
/// so [`RigidBody::update_shape`] must have run since they last moved.
pub fn detect_collision(
    handle_a: BodyHandle,
    body_a: &RigidBody,
    handle_b: BodyHandle,
    body_b: &RigidBody,
) -> Option<ContactManifold> {
    let contact = match (body_a.shape(), body_b.shape()) {
        (Shape::Polygon(_), Shape::Polygon(_)) => {
            polygon_polygon(body_a.world_vertices(), body_b.world_vertices())
        }
        (Shape::Polygon(_), Shape::Circle(circle)) => {
            polygon_circle(body_a.world_vertices(), body_b.position, circle.radius())
        }
        (Shape::Circle(circle), Shape::Polygon(_)) => {
            polygon_circle(body_b.world_vertices(), body_a.position, circle.radius())
        }
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => circle_circle(
            body_a.position,
            circle_a.radius(),
            body_b.position,
            circle_b.radius(),
        ),
    }?;

    Some(ContactManifold {
        body_a: handle_a,
        body_b: handle_b,
        normal: contact.normal,
        depth: contact.depth,
        contact_points: contact.points,
    })
}
