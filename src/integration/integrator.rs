use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Advances a body's state by `dt` using semi-implicit integration with a
/// half-step acceleration term:
///
/// ```text
/// a = gravity + force / m
/// x += v * dt + a * dt^2 / 2
/// v += a * dt
/// ```
///
/// Bodies with zero inverse mass are skipped entirely. The accumulated
/// force is zeroed afterwards, so forces applied through
/// [`RigidBody::apply_force`] act for exactly one substep.
pub fn integrate(body: &mut RigidBody, gravity: Vec2, dt: f64) {
    if body.inverse_mass() == 0.0 {
        return;
    }

    let acceleration = gravity + body.force() * body.inverse_mass();

    body.position += body.velocity * dt + acceleration * (0.5 * dt * dt);
    body.velocity += acceleration * dt;
    body.rotation += body.angular_velocity * dt;

    body.clear_force();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Material;
    use crate::objects::rigid_body::BodyType;
    use crate::shapes::Shape;

    const EPSILON: f64 = 1e-9;

    fn test_body(body_type: BodyType) -> RigidBody {
        RigidBody::new(
            Shape::circle(1.0),
            Material::default(),
            body_type,
            Vec2::ZERO,
            0.0,
            0,
        )
    }

    #[test]
    fn test_integrate_constant_velocity() {
        let mut body = test_body(BodyType::Dynamic);
        body.velocity = Vec2::new(10.0, -5.0);

        integrate(&mut body, Vec2::ZERO, 0.1);

        assert!((body.position.x - 1.0).abs() < EPSILON);
        assert!((body.position.y - -0.5).abs() < EPSILON);
        assert_eq!(body.velocity, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_integrate_gravity() {
        let mut body = test_body(BodyType::Dynamic);
        let gravity = Vec2::new(0.0, -10.0);
        let dt = 0.1;

        integrate(&mut body, gravity, dt);

        // x += v*dt + a*dt^2/2 with v = 0
        assert!((body.position.y - -0.05).abs() < EPSILON);
        assert!((body.velocity.y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_applied_force() {
        let mut body = test_body(BodyType::Dynamic);
        let mass = body.mass();
        body.apply_force(Vec2::new(mass * 4.0, 0.0)); // a = (4, 0)
        let dt = 0.5;

        integrate(&mut body, Vec2::ZERO, dt);

        assert!((body.position.x - 0.5).abs() < EPSILON); // 4 * 0.25 / 2
        assert!((body.velocity.x - 2.0).abs() < EPSILON);
        assert_eq!(body.force(), Vec2::ZERO); // Cleared after the step
    }

    #[test]
    fn test_integrate_angular_velocity() {
        let mut body = test_body(BodyType::Dynamic);
        body.angular_velocity = 2.0;

        integrate(&mut body, Vec2::ZERO, 0.25);

        assert!((body.rotation - 0.5).abs() < EPSILON);
        assert!((body.angular_velocity - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_static_body_untouched() {
        let mut body = test_body(BodyType::Static);
        body.apply_force(Vec2::new(100.0, 100.0));
        body.velocity = Vec2::new(1.0, 1.0); // Even with a velocity set

        integrate(&mut body, Vec2::new(0.0, -9.8), 0.1);

        assert_eq!(body.position, Vec2::ZERO);
        assert_eq!(body.rotation, 0.0);
    }
}
