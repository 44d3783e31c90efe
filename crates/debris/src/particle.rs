//! Debris particles
//!
//! The unit of mass in the cohesion simulation. Plain data mutated in
//! place; particles never outlive the simulation that created them.

use nalgebra::{Point3, Vector3};
use planetary::Material;

/// One piece of debris. Position in meters from the disk center, velocity
/// in m/s, mass in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebrisParticle {
    pub mass: f64,
    pub material: Material,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
}

impl DebrisParticle {
    pub fn new(mass: f64, material: Material, position: Point3<f64>) -> Self {
        DebrisParticle {
            mass,
            material,
            position,
            velocity: Vector3::zeros(),
        }
    }

    pub fn distance_to(&self, other: &DebrisParticle) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Distance from the disk origin, in meters.
    pub fn radial_distance(&self) -> f64 {
        self.position.coords.magnitude()
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

/// Mass-weighted centroid of a particle set. Falls back to the origin for
/// an empty or massless set.
pub fn mass_weighted_center(particles: &[DebrisParticle]) -> Point3<f64> {
    let total_mass: f64 = particles.iter().map(|p| p.mass).sum();
    if total_mass <= 0.0 {
        return Point3::origin();
    }

    let weighted: Vector3<f64> = particles
        .iter()
        .map(|p| p.position.coords * p.mass)
        .sum::<Vector3<f64>>();
    Point3::from(weighted / total_mass)
}
