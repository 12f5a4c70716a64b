use crate::math::vec2::Vec2;
use crate::world::BodyHandle;

/// Narrow-phase collision result between two bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactManifold {
    /// Handle of the first body involved in the collision.
    pub body_a: BodyHandle,
    /// Handle of the second body involved in the collision.
    pub body_b: BodyHandle,
    /// Unit collision normal. Detection orients it from body A towards
    /// body B by convention; resolution re-verifies and flips if needed.
    pub normal: Vec2,
    /// Penetration depth along the normal, non-negative.
    pub depth: f64,
    /// One contact point for vertex or circle contacts, two for
    /// edge-edge overlap. World space.
    pub contact_points: Vec<Vec2>,
}
