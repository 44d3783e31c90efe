//! Debris field generation
//!
//! Scatters particles through an annular disk. Each particle draws from
//! the RNG in a fixed order (material, mass factor, disk angle, disk
//! distance, vertical offset) so the stream layout is reproducible.

use crate::distribution::ElementDistribution;
use crate::particle::DebrisParticle;
use nalgebra::Point3;
use rand::Rng;
use std::f64::consts::TAU;

/// Default particle count for a new field.
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;

/// Default total field mass in kg (one Earth mass).
pub const DEFAULT_TARGET_MASS: f64 = 5.97e24;

/// Inner edge of the debris annulus, in meters.
const DISK_INNER_RADIUS: f64 = 1e9;

/// Radial span of the annulus, in meters.
const DISK_RADIAL_SPAN: f64 = 5e9;

/// Full vertical spread of the disk, in meters.
const DISK_THICKNESS: f64 = 1e8;

/// Generates a debris field of `count` particles totalling roughly
/// `target_mass` kg. Per-particle masses jitter around the even share by
/// a factor in [0.5, 1.5), so the realized total wanders a little; the
/// simulation conserves whatever total was realized.
///
/// A zero count yields an empty field. Never fails.
pub fn generate_debris_field<R: Rng>(
    count: usize,
    target_mass: f64,
    distribution: &ElementDistribution,
    rng: &mut R,
) -> Vec<DebrisParticle> {
    if count == 0 {
        return Vec::new();
    }

    let mass_share = target_mass / count as f64;

    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let material = distribution.sample(rng);
        let mass = mass_share * (0.5 + rng.random::<f64>());

        let angle = rng.random::<f64>() * TAU;
        let distance = DISK_INNER_RADIUS + rng.random::<f64>() * DISK_RADIAL_SPAN;
        let vertical = (rng.random::<f64>() - 0.5) * DISK_THICKNESS;

        let position = Point3::new(
            angle.cos() * distance,
            vertical,
            angle.sin() * distance,
        );

        particles.push(DebrisParticle::new(mass, material, position));
    }

    particles
}
