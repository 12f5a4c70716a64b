//! A 2D rigid body physics engine.
//!
//! The [`World`] owns every body and advances the simulation in fixed
//! substeps: broad-phase AABB filtering, SAT narrow-phase collision
//! detection, impulse-based contact resolution, and semi-implicit
//! integration. Callers create bodies through [`World::create_body`],
//! hold generation-checked [`BodyHandle`]s, and read back transforms for
//! rendering; windowing, cameras, and drawing live outside this crate.

pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Aabb, ContactManifold};
pub use common::Material;
pub use math::vec2::Vec2;
pub use objects::rigid_body::{BodyType, MassProperties, RigidBody};
pub use shapes::{Circle, Polygon, Shape};
pub use world::{BodyHandle, StepPerformance, World, WorldError};
