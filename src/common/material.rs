//! Defines physical material properties.

/// Physical properties of a rigid body affecting its mass and collisions.
///
/// Friction and restitution are expected to lie in [0, 1] by convention;
/// no range is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Material density in kg/m^2.
    pub density: f64,
    /// Coefficient of static friction.
    pub static_friction: f64,
    /// Coefficient of kinetic friction.
    pub kinetic_friction: f64,
    /// Coefficient of restitution (elasticity).
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    pub restitution: f64,
}

impl Material {
    pub fn new(density: f64, static_friction: f64, kinetic_friction: f64, restitution: f64) -> Self {
        Self {
            density,
            static_friction,
            kinetic_friction,
            restitution,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1.0,
            static_friction: 0.4,
            kinetic_friction: 0.3,
            restitution: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_default() {
        let material = Material::default();
        assert_eq!(material.density, 1.0);
        assert_eq!(material.static_friction, 0.4);
        assert_eq!(material.kinetic_friction, 0.3);
        assert_eq!(material.restitution, 0.8);
    }

    #[test]
    fn test_material_new() {
        let material = Material::new(2.5, 0.9, 0.7, 0.1);
        assert_eq!(material.density, 2.5);
        assert_eq!(material.static_friction, 0.9);
        assert_eq!(material.kinetic_friction, 0.7);
        assert_eq!(material.restitution, 0.1);
    }
}
