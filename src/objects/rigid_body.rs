use crate::collision::Aabb;
use crate::common::Material;
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Kinematic category of a body. Static bodies have zero inverse mass
/// and inertia and never move through integration or resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Static,
    Dynamic,
}

/// Mass and moment of inertia with their reciprocals.
///
/// Zero inverses let the impulse formulas treat immovable bodies as
/// infinitely heavy without branching.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassProperties {
    pub mass: f64,
    pub inv_mass: f64,
    pub inertia: f64,
    pub inv_inertia: f64,
}

impl MassProperties {
    /// Derives mass data from shape, material, and kinematic category.
    ///
    /// Static bodies get exactly zero for all four values, never a
    /// division result. Called at body construction and again by every
    /// mutator that changes shape, material, or category.
    pub fn derive(shape: &Shape, material: &Material, body_type: BodyType) -> Self {
        match body_type {
            BodyType::Static => Self {
                mass: 0.0,
                inv_mass: 0.0,
                inertia: 0.0,
                inv_inertia: 0.0,
            },
            BodyType::Dynamic => {
                let mass = shape.area() * material.density;
                let inertia = shape.inertia_factor() * material.density;
                Self {
                    mass,
                    inv_mass: 1.0 / mass,
                    inertia,
                    inv_inertia: 1.0 / inertia,
                }
            }
        }
    }
}

/// A rigid body owned by the world.
///
/// `position` is the world location of the shape's centroid; polygon
/// bodies rotate about it. The world-space vertex list and AABB are
/// caches refreshed by [`update_shape`](Self::update_shape) at the top of
/// every substep; moving a body without refreshing leaves them stale.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// World position of the shape's centroid.
    pub position: Vec2,
    /// Rotation in radians.
    pub rotation: f64,
    pub velocity: Vec2,
    /// Angular velocity in radians per second.
    pub angular_velocity: f64,

    // Force accumulated over the current substep
    force: Vec2,

    shape: Shape,
    material: Material,
    body_type: BodyType,
    mass_data: MassProperties,

    // World-space caches, valid since the last update_shape call
    world_vertices: Vec<Vec2>,
    aabb: Aabb,

    id: u64,
}

impl RigidBody {
    /// Bodies are created by [`World::create_body`](crate::World::create_body),
    /// which assigns the unique id.
    pub(crate) fn new(
        shape: Shape,
        material: Material,
        body_type: BodyType,
        position: Vec2,
        rotation: f64,
        id: u64,
    ) -> Self {
        let mass_data = MassProperties::derive(&shape, &material, body_type);
        let mut body = Self {
            position,
            rotation,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            shape,
            material,
            body_type,
            mass_data,
            world_vertices: Vec::new(),
            aabb: Aabb::default(),
            id,
        };
        body.update_shape();
        body
    }

    /// Refreshes the world-space vertex cache and AABB from the current
    /// transform. Polygon vertices rotate about the shape's local
    /// centroid, then translate by the body position; a circle's AABB is
    /// simply `position ± radius` per axis.
    pub fn update_shape(&mut self) {
        match &self.shape {
            Shape::Polygon(polygon) => {
                let centroid = polygon.centroid();
                let rotation = self.rotation;
                let position = self.position;
                self.world_vertices = polygon
                    .vertices()
                    .iter()
                    .map(|&vertex| (vertex - centroid).rotate(rotation) + position)
                    .collect();
                self.aabb = Aabb::from_points(&self.world_vertices)
                    .unwrap_or(Aabb::new(position, position));
            }
            Shape::Circle(circle) => {
                let extent = Vec2::new(circle.radius(), circle.radius());
                self.aabb = Aabb::new(self.position - extent, self.position + extent);
            }
        }
    }

    /// Applies a force in newtons, accumulated until the next
    /// integration.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Applies an instantaneous impulse in N·s, changing velocity
    /// immediately. No-op on static bodies.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.mass_data.inv_mass;
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Zeroes the accumulated force; called after every integration.
    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    pub fn move_by(&mut self, displacement: Vec2) {
        self.position += displacement;
    }

    pub fn rotate_by(&mut self, theta: f64) {
        self.rotation += theta;
    }

    pub fn set_transform(&mut self, position: Vec2, rotation: f64) {
        self.position = position;
        self.rotation = rotation;
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> Material {
        self.material
    }

    /// Replaces the material and recomputes the derived mass data.
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        self.mass_data = MassProperties::derive(&self.shape, &self.material, self.body_type);
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Changes the kinematic category and recomputes the derived mass
    /// data.
    pub fn set_body_type(&mut self, body_type: BodyType) {
        self.body_type = body_type;
        self.mass_data = MassProperties::derive(&self.shape, &self.material, self.body_type);
    }

    pub fn mass(&self) -> f64 {
        self.mass_data.mass
    }

    pub fn inverse_mass(&self) -> f64 {
        self.mass_data.inv_mass
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.mass_data.inertia
    }

    pub fn inverse_moment_of_inertia(&self) -> f64 {
        self.mass_data.inv_inertia
    }

    /// Cached world-space vertices. Empty for circle bodies.
    pub fn world_vertices(&self) -> &[Vec2] {
        &self.world_vertices
    }

    /// Cached world-space bounding box.
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Unique id assigned at creation, never reused.
    pub fn id(&self) -> u64 {
        self.id
    }
}
