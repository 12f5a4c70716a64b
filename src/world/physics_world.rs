use thiserror::Error;
use tracing::{debug, trace};

use crate::collision::{detect_collision, ContactManifold};
use crate::common::Material;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::{BodyType, RigidBody};
use crate::shapes::Shape;

use super::timer::Timer;

/// Gravity applied by [`World::new`], in m/s^2.
pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: -9.8 };

/// Generation-checked reference to a body in a [`World`].
///
/// Handles stay cheap to copy and survive storage reuse: removing a body
/// bumps its slot's generation, so a handle held past `remove_body` or
/// `clear` fails validation instead of touching whatever body occupies
/// the slot next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// The handle refers to a body that was removed, or to a cleared or
    /// foreign world.
    #[error("stale or unknown body handle {0:?}")]
    StaleHandle(BodyHandle),
}

/// Wall-clock timings of the last `step` call, averaged per substep.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepPerformance {
    pub detection_ms: f64,
    pub resolution_ms: f64,
    pub integration_ms: f64,
}

struct BodySlot {
    generation: u32,
    body: Option<RigidBody>,
}

/// The simulation world. Owns every body; callers interact through
/// [`BodyHandle`]s and read back state for rendering after each step.
pub struct World {
    gravity: Vec2,
    slots: Vec<BodySlot>,
    free_slots: Vec<u32>,
    // Contacts detected during the most recently completed substep
    contacts: Vec<ContactManifold>,
    next_body_id: u64,
    performance: StepPerformance,
}

impl World {
    /// Creates an empty world with [`DEFAULT_GRAVITY`].
    pub fn new() -> Self {
        Self::with_gravity(DEFAULT_GRAVITY)
    }

    pub fn with_gravity(gravity: Vec2) -> Self {
        Self {
            gravity,
            slots: Vec::new(),
            free_slots: Vec::new(),
            contacts: Vec::new(),
            next_body_id: 0,
            performance: StepPerformance::default(),
        }
    }

    /// Creates a body and returns its handle. The only way to add a body
    /// to the world; derived mass data and the world-space shape cache
    /// are computed up front.
    pub fn create_body(
        &mut self,
        shape: Shape,
        material: Material,
        body_type: BodyType,
        position: Vec2,
        rotation: f64,
    ) -> BodyHandle {
        let id = self.next_body_id;
        self.next_body_id += 1;
        let body = RigidBody::new(shape, material, body_type, position, rotation, id);

        let handle = if let Some(index) = self.free_slots.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            BodyHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(BodySlot {
                generation: 0,
                body: Some(body),
            });
            BodyHandle {
                index,
                generation: 0,
            }
        };

        debug!(id, index = handle.index, ?body_type, "created body");
        handle
    }

    /// Removes a body, invalidating its handle and any copies of it.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<(), WorldError> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.body.is_some())
            .ok_or(WorldError::StaleHandle(handle))?;

        slot.body = None;
        slot.generation += 1;
        self.free_slots.push(handle.index);

        debug!(index = handle.index, "removed body");
        Ok(())
    }

    /// Removes every body, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        let removed = self.body_count();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.body.take().is_some() {
                slot.generation += 1;
                self.free_slots.push(index as u32);
            }
        }
        self.contacts.clear();
        debug!(removed, "cleared world");
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&RigidBody, WorldError> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_ref())
            .ok_or(WorldError::StaleHandle(handle))
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody, WorldError> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_mut())
            .ok_or(WorldError::StaleHandle(handle))
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.body(handle).is_ok()
    }

    /// Iterates over every live body with its handle. Used by render and
    /// debug layers.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.body.as_ref().map(|body| {
                (
                    BodyHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    body,
                )
            })
        })
    }

    pub fn body_count(&self) -> usize {
        self.slots.len() - self.free_slots.len()
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Contact manifolds from the most recently completed substep only;
    /// each substep replaces the list.
    pub fn contacts(&self) -> &[ContactManifold] {
        &self.contacts
    }

    /// Per-phase timings of the last `step` call, averaged over its
    /// substeps.
    pub fn step_performance(&self) -> StepPerformance {
        self.performance
    }

    /// Advances the simulation by `total_time` seconds split into
    /// `substeps` equal slices. Each substep refreshes every body's shape
    /// cache, detects contacts over all non-static pairs, resolves each
    /// contact once in detection order, and integrates motion.
    pub fn step(&mut self, total_time: f64, substeps: u32) {
        if substeps == 0 {
            return;
        }

        let dt = total_time / f64::from(substeps);
        let gravity = self.gravity;

        let mut detection_ms = 0.0;
        let mut resolution_ms = 0.0;
        let mut integration_ms = 0.0;
        let mut timer = Timer::new();

        for substep in 0..substeps {
            self.contacts.clear();
            timer.reset();

            // Refresh AABBs and cached world-space polygon vertices
            for slot in self.slots.iter_mut() {
                if let Some(body) = slot.body.as_mut() {
                    body.update_shape();
                }
            }

            // O(n^2) pair test over live bodies: broad-phase AABB filter,
            // then the SAT narrow phase
            for i in 0..self.slots.len() {
                let Some(body_a) = self.slots[i].body.as_ref() else {
                    continue;
                };
                for j in (i + 1)..self.slots.len() {
                    let Some(body_b) = self.slots[j].body.as_ref() else {
                        continue;
                    };

                    if body_a.body_type() == BodyType::Static
                        && body_b.body_type() == BodyType::Static
                    {
                        continue;
                    }

                    if !body_a.aabb().intersects(&body_b.aabb()) {
                        continue;
                    }

                    let handle_a = BodyHandle {
                        index: i as u32,
                        generation: self.slots[i].generation,
                    };
                    let handle_b = BodyHandle {
                        index: j as u32,
                        generation: self.slots[j].generation,
                    };

                    if let Some(manifold) = detect_collision(handle_a, body_a, handle_b, body_b) {
                        self.contacts.push(manifold);
                    }
                }
            }

            detection_ms += timer.elapsed_ms();
            timer.reset();

            // Resolve each contact independently, in detection order
            let mut manifolds = std::mem::take(&mut self.contacts);
            for manifold in manifolds.iter_mut() {
                self.resolve_collision(manifold);
            }
            self.contacts = manifolds;

            resolution_ms += timer.elapsed_ms();
            timer.reset();

            for slot in self.slots.iter_mut() {
                if let Some(body) = slot.body.as_mut() {
                    integrator::integrate(body, gravity, dt);
                }
            }

            integration_ms += timer.elapsed_ms();
            trace!(substep, contacts = self.contacts.len(), "substep complete");
        }

        let substep_count = f64::from(substeps);
        self.performance = StepPerformance {
            detection_ms: detection_ms / substep_count,
            resolution_ms: resolution_ms / substep_count,
            integration_ms: integration_ms / substep_count,
        };
    }

    /// Impulse-based resolution of a single contact: geometric
    /// separation, then a normal impulse with restitution, then a
    /// friction impulse along the tangent.
    fn resolve_collision(&mut self, manifold: &mut ContactManifold) {
        let index_a = manifold.body_a.index as usize;
        let index_b = manifold.body_b.index as usize;

        // Detection emits pairs with index_a < index_b
        let (head, tail) = self.slots.split_at_mut(index_b);
        let (Some(body_a), Some(body_b)) = (head[index_a].body.as_mut(), tail[0].body.as_mut())
        else {
            return;
        };

        let a_static = body_a.body_type() == BodyType::Static;
        let b_static = body_b.body_type() == BodyType::Static;
        if a_static && b_static {
            return;
        }

        // Positions before separation; contact offsets use these
        let origin_a = body_a.position;
        let origin_b = body_b.position;

        // Re-orient the normal from body A towards body B
        let direction = origin_a - origin_b;
        if direction.dot(manifold.normal) > 0.0 {
            manifold.normal = -manifold.normal;
        }
        let normal = manifold.normal;

        // Geometric separation: a static partner takes none of it
        if a_static {
            body_b.move_by(normal * manifold.depth);
        } else if b_static {
            body_a.move_by(normal * -manifold.depth);
        } else {
            body_a.move_by(normal * (-manifold.depth * 0.5));
            body_b.move_by(normal * (manifold.depth * 0.5));
        }

        let material_a = body_a.material();
        let material_b = body_b.material();
        let restitution = material_a.restitution * material_b.restitution;
        let static_friction = material_a.static_friction * material_b.static_friction;
        let kinetic_friction = material_a.kinetic_friction * material_b.kinetic_friction;

        let inv_mass_a = body_a.inverse_mass();
        let inv_mass_b = body_b.inverse_mass();
        let inv_inertia_a = body_a.inverse_moment_of_inertia();
        let inv_inertia_b = body_b.inverse_moment_of_inertia();

        // Average the manifold's contact points into one
        let mut contact_point = Vec2::ZERO;
        for &point in &manifold.contact_points {
            contact_point += point;
        }
        let contact_point = contact_point / manifold.contact_points.len() as f64;

        let ra = contact_point - origin_a;
        let rb = contact_point - origin_b;
        let ra_perp = ra.perp();
        let rb_perp = rb.perp();

        // Point velocities: linear plus the angular contribution
        let va = body_a.velocity + ra_perp * body_a.angular_velocity;
        let vb = body_b.velocity + rb_perp * body_b.angular_velocity;
        let relative_velocity = vb - va;

        let mut j = -(1.0 + restitution) * relative_velocity.dot(normal);
        j /= inv_mass_a
            + inv_mass_b
            + inv_inertia_a * ra.cross(normal).powi(2)
            + inv_inertia_b * rb.cross(normal).powi(2);

        let impulse = normal * j;
        body_a.velocity -= impulse * inv_mass_a;
        body_a.angular_velocity -= inv_inertia_a * ra.cross(impulse);
        body_b.velocity += impulse * inv_mass_b;
        body_b.angular_velocity += inv_inertia_b * rb.cross(impulse);

        // Friction along the tangential part of the relative velocity
        let tangent = relative_velocity - normal * relative_velocity.dot(normal);
        if tangent.approx_eq(Vec2::ZERO) {
            return;
        }
        let tangent = tangent.normalize();

        let ra_perp_dot_t = ra_perp.dot(tangent);
        let rb_perp_dot_t = rb_perp.dot(tangent);

        let mut j_tangent = -relative_velocity.dot(tangent);
        j_tangent /= inv_mass_a
            + inv_mass_b
            + inv_inertia_a * ra_perp_dot_t.powi(2)
            + inv_inertia_b * rb_perp_dot_t.powi(2);

        // Static friction holds until the tangential impulse overcomes
        // it, then kinetic friction takes over
        let friction_impulse = if j_tangent.abs() <= j * static_friction {
            tangent * j_tangent
        } else {
            tangent * (-j * kinetic_friction)
        };

        body_a.velocity -= friction_impulse * inv_mass_a;
        body_a.angular_velocity -= inv_inertia_a * ra.cross(friction_impulse);
        body_b.velocity += friction_impulse * inv_mass_b;
        body_b.angular_velocity += inv_inertia_b * rb.cross(friction_impulse);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
