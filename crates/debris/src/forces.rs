//! Cohesion and separation steering
//!
//! One integration step of the cohesion model. Every particle is steered
//! toward the mass-weighted centroid of the field, weighted by its own
//! mass so heavier particles pull inward harder, with short-range
//! repulsion keeping near neighbors from overlapping prematurely. The
//! steering magnitude and the resulting speed are both clamped, which
//! keeps the huge mass terms from blowing up the integration.

use crate::particle::{mass_weighted_center, DebrisParticle};
use nalgebra::Vector3;

/// Integration step, in seconds.
const DT: f64 = 1.0;

/// Mass scale dividing particle mass into a cohesion weight.
const COHESION_MASS_SCALE: f64 = 1e20;

/// Neighbors inside this range repel, in meters.
const SEPARATION_RADIUS: f64 = 1e6;

/// Weight on the separation term.
const SEPARATION_WEIGHT: f64 = 0.5;

/// Cap on the steering magnitude, in m/s².
const MAX_FORCE: f64 = 100.0;

/// Cap on particle speed, in m/s.
const MAX_SPEED: f64 = 1000.0;

/// Applies one cycle of steering and integrates velocities and positions
/// in place.
pub fn apply_cohesion_step(particles: &mut [DebrisParticle]) {
    if particles.len() < 2 {
        return;
    }

    let center = mass_weighted_center(particles);

    // Steering is accumulated against a snapshot of positions so the
    // update order of the slice does not affect the result
    let snapshot: Vec<nalgebra::Point3<f64>> = particles.iter().map(|p| p.position).collect();

    for (i, particle) in particles.iter_mut().enumerate() {
        let mut steering = Vector3::zeros();

        // Cohesion: pull toward the mass center, scaled by own mass
        let to_center = center - particle.position;
        let distance = to_center.magnitude();
        if distance > 0.0 {
            let weight = particle.mass / COHESION_MASS_SCALE;
            steering += to_center / distance * weight;
        }

        // Separation: push away from close neighbors
        for (j, other_position) in snapshot.iter().enumerate() {
            if i == j {
                continue;
            }
            let offset = particle.position - other_position;
            let gap = offset.magnitude();
            if gap > 0.0 && gap < SEPARATION_RADIUS {
                steering += offset / (gap * gap) * SEPARATION_WEIGHT;
            }
        }

        let force = steering.magnitude();
        if force > MAX_FORCE {
            steering = steering / force * MAX_FORCE;
        }

        particle.velocity += steering * DT;

        let speed = particle.velocity.magnitude();
        if speed > MAX_SPEED {
            particle.velocity = particle.velocity / speed * MAX_SPEED;
        }

        particle.position += particle.velocity * DT;
    }
}
