pub mod physics_world;
pub(crate) mod timer;

pub use physics_world::{BodyHandle, StepPerformance, World, WorldError, DEFAULT_GRAVITY};
