//! Gravitational differentiation
//!
//! Periodic density sorting: every particle gets an inward velocity nudge
//! proportional to its material density and mass, so denser material
//! drifts toward the center of the forming body over the run. The nudge
//! itself is unbounded; the speed clamp in the next steering cycle bounds
//! its effect.

use crate::particle::{mass_weighted_center, DebrisParticle};

/// Density scale dividing material density into a settling weight.
const DENSITY_SCALE: f64 = 10000.0;

/// Nudges every particle's velocity toward the mass-weighted center,
/// scaled by its material density and mass.
pub fn apply_differentiation(particles: &mut [DebrisParticle]) {
    if particles.len() < 2 {
        return;
    }

    let center = mass_weighted_center(particles);

    for particle in particles.iter_mut() {
        let to_center = center - particle.position;
        let distance = to_center.magnitude();
        if distance <= 0.0 {
            continue;
        }

        let density_factor = particle.material.density() / DENSITY_SCALE;
        let nudge = to_center / distance * density_factor * 0.1 * particle.mass * 0.01;
        particle.velocity += nudge;
    }
}
