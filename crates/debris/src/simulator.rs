//! The cohesion simulation driver
//!
//! Runs the debris field through a fixed number of cycles, each standing
//! in for roughly 45 million years of accretion. Every cycle applies the
//! phases in a strict order: steering and integration, then collision
//! merging, then (every tenth cycle, while the field is still crowded)
//! gravitational differentiation.

use crate::collisions::resolve_collisions;
use crate::differentiation::apply_differentiation;
use crate::forces::apply_cohesion_step;
use crate::momentum::angular_momentum;
use crate::particle::DebrisParticle;
use planetary::{AccretionEvent, Composition};

/// Number of simulation cycles. Fixed; the run length never depends on
/// the field contents.
pub const SIMULATION_CYCLES: u32 = 100;

/// Differentiation runs on cycles divisible by this.
const DIFFERENTIATION_INTERVAL: u32 = 10;

/// Differentiation stops once the field has thinned to this many
/// particles or fewer.
const DIFFERENTIATION_MIN_PARTICLES: usize = 10;

/// Everything the simulation leaves behind.
#[derive(Debug, Clone)]
pub struct AccretionOutcome {
    /// Particles that survived all merging.
    pub particles: Vec<DebrisParticle>,
    /// Per-material mass totals of the surviving field.
    pub composition: Composition,
    /// Total surviving mass in kg.
    pub total_mass: f64,
    /// Angular momentum magnitude of the final field, in kg·m²/s.
    pub angular_momentum: f64,
    /// Every collision, in the order it happened.
    pub history: Vec<AccretionEvent>,
}

impl AccretionOutcome {
    fn empty() -> Self {
        AccretionOutcome {
            particles: Vec::new(),
            composition: Composition::new(),
            total_mass: 0.0,
            angular_momentum: 0.0,
            history: Vec::new(),
        }
    }
}

/// Runs the full cohesion simulation, consuming the field.
///
/// An empty field short-circuits to an empty outcome. Total mass is
/// conserved from input to output.
pub fn run_cohesion_simulation(mut particles: Vec<DebrisParticle>) -> AccretionOutcome {
    if particles.is_empty() {
        return AccretionOutcome::empty();
    }

    let mut history = Vec::new();

    for cycle in 0..SIMULATION_CYCLES {
        apply_cohesion_step(&mut particles);
        resolve_collisions(&mut particles, cycle, &mut history);

        if cycle % DIFFERENTIATION_INTERVAL == 0 && particles.len() > DIFFERENTIATION_MIN_PARTICLES
        {
            apply_differentiation(&mut particles);
        }
    }

    let mut composition = Composition::new();
    for particle in &particles {
        composition.add(particle.material, particle.mass);
    }

    let total_mass = composition.total_mass();
    let momentum = angular_momentum(&particles);

    AccretionOutcome {
        particles,
        composition,
        total_mass,
        angular_momentum: momentum,
        history,
    }
}
