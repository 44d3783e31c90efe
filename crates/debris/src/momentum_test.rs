use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::momentum::angular_momentum;
use crate::particle::DebrisParticle;
use planetary::Material;

fn orbiting(mass: f64, x: f64, vz: f64) -> DebrisParticle {
    let mut p = DebrisParticle::new(mass, Material::Si, Point3::new(x, 0.0, 0.0));
    p.velocity = Vector3::new(0.0, 0.0, vz);
    p
}

#[test]
fn test_empty_field_has_zero_momentum() {
    assert_relative_eq!(angular_momentum(&[]), 0.0);
}

#[test]
fn test_static_field_has_zero_momentum() {
    let field = vec![
        DebrisParticle::new(1e21, Material::Fe, Point3::new(1e9, 0.0, 0.0)),
        DebrisParticle::new(1e21, Material::Si, Point3::new(-1e9, 0.0, 0.0)),
    ];
    assert_relative_eq!(angular_momentum(&field), 0.0);
}

#[test]
fn test_single_orbiting_particle() {
    // One particle is its own mass center, so r = 0 about that center;
    // pair it with a heavy anchor to give r a lever arm
    let anchor = DebrisParticle::new(1e30, Material::Fe, Point3::origin());
    let orbiter = orbiting(1e20, 1e9, 100.0);
    let field = vec![anchor, orbiter];

    // Lever arm is effectively the full 1e9 m against the heavy anchor
    let expected = 1e20 * 1e9 * 100.0;
    assert_relative_eq!(angular_momentum(&field), expected, max_relative = 1e-6);
}

#[test]
fn test_counter_rotation_adds_instead_of_cancelling() {
    // Mirror-image orbits: the vector sum is zero but magnitudes add
    let field = vec![orbiting(1e20, 1e9, 100.0), orbiting(1e20, -1e9, -100.0)];

    let expected = 2.0 * 1e20 * 1e9 * 100.0;
    assert_relative_eq!(angular_momentum(&field), expected, max_relative = 1e-9);
}
