pub mod aabb;
pub mod detection;
pub mod manifold;

// Re-export key types
pub use aabb::Aabb;
pub use detection::detect_collision;
pub use manifold::ContactManifold;
