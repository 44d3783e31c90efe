//! Debris field and cohesion simulation
//!
//! The transient substrate of the accretion engine: a cloud of debris
//! particles generated from a seeded element distribution, pulled together
//! over a fixed number of cycles by cohesion and separation steering,
//! merged on close approach, and periodically differentiated by density.
//!
//! Particles are ephemeral working state. Only the surviving particles,
//! the per-material mass totals, and the collision log leave this crate.

pub mod collisions;
pub mod differentiation;
pub mod distribution;
pub mod field;
pub mod forces;
pub mod momentum;
pub mod particle;
pub mod simulator;

pub use distribution::ElementDistribution;
pub use field::generate_debris_field;
pub use particle::DebrisParticle;
pub use simulator::{run_cohesion_simulation, AccretionOutcome, SIMULATION_CYCLES};

#[cfg(test)]
mod momentum_test;
