//! Angular momentum accumulation
//!
//! Scalar angular momentum of the field about its mass-weighted center.
//! Summed as per-particle magnitudes, not as the magnitude of the vector
//! sum: counter-rotating particles add rather than cancel, so the figure
//! measures total rotational content rather than net spin.

use crate::particle::{mass_weighted_center, DebrisParticle};

/// Total angular momentum magnitude in kg·m²/s, summed per particle
/// about the mass-weighted center.
pub fn angular_momentum(particles: &[DebrisParticle]) -> f64 {
    if particles.is_empty() {
        return 0.0;
    }

    let center = mass_weighted_center(particles);

    particles
        .iter()
        .map(|p| {
            let r = p.position - center;
            let l = r.cross(&p.velocity) * p.mass;
            l.magnitude()
        })
        .sum()
}
